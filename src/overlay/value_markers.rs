use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::{AxisRange, CoordinateMapper, DEGENERATE_NORMALIZED_VALUE, PlotArea};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Neutral color reserved for the synthetic cap marker.
pub const CAP_MARKER_COLOR: Color = Color::rgb(0.6, 0.6, 0.6);

/// User value gridlines, ordered by value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomMarkers {
    markers: BTreeMap<OrderedFloat<f64>, Color>,
}

impl CustomMarkers {
    pub fn insert(&mut self, value: f64, color: Color) -> ChartResult<()> {
        if !value.is_finite() {
            return Err(ChartError::InvalidInput(
                "custom marker value must be finite".to_owned(),
            ));
        }
        color.validate()?;
        self.markers.insert(OrderedFloat(value), color);
        Ok(())
    }

    pub fn remove(&mut self, value: f64) -> Option<Color> {
        self.markers.remove(&OrderedFloat(value))
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, Color)> + '_ {
        self.markers.iter().map(|(value, color)| (value.0, *color))
    }

    #[must_use]
    pub fn largest_value(&self) -> Option<f64> {
        self.markers.keys().next_back().map(|value| value.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    User,
    /// Inserted at draw time to cap data that runs above every user marker.
    Cap,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedMarker {
    pub value: f64,
    pub color: Color,
    pub role: MarkerRole,
}

/// Working copy of the custom markers, plus a cap at `ceil(data_maximum)`
/// when the data tops the largest marker. The stored markers are not modified.
#[must_use]
pub fn plan_custom_markers(
    markers: &CustomMarkers,
    data_maximum: Option<f64>,
) -> SmallVec<[PlannedMarker; 8]> {
    let mut planned: SmallVec<[PlannedMarker; 8]> = markers
        .iter()
        .map(|(value, color)| PlannedMarker {
            value,
            color,
            role: MarkerRole::User,
        })
        .collect();

    if let (Some(largest), Some(maximum)) = (markers.largest_value(), data_maximum) {
        if maximum > largest {
            planned.push(PlannedMarker {
                value: maximum.ceil(),
                color: CAP_MARKER_COLOR,
                role: MarkerRole::Cap,
            });
        }
    }
    planned
}

/// Pixel Y of a custom marker.
///
/// The zero reference is the X-axis minimum while the spread is the Y
/// spread; rendered output depends on this pairing. Returns `None` outside
/// `[top, bottom]`.
#[must_use]
pub fn custom_marker_pixel_y(
    value: f64,
    zero_reference: f64,
    y_range: AxisRange,
    plot: PlotArea,
) -> Option<f64> {
    let fraction = if y_range.is_degenerate() {
        DEGENERATE_NORMALIZED_VALUE
    } else {
        (value - zero_reference) / y_range.spread
    };
    let y = plot.top + plot.height - plot.height * fraction;
    plot.contains_y(y).then_some(y)
}

/// Evenly spaced default gridline at `value`, drawn at pixel `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueGridline {
    pub value: f64,
    pub y: f64,
}

/// `marker_count + 1` gridlines from the Y minimum to the Y maximum; a
/// degenerate range collapses to one centered line.
#[must_use]
pub fn plan_value_gridlines(
    y_range: AxisRange,
    marker_count: usize,
    mapper: CoordinateMapper,
) -> SmallVec<[ValueGridline; 8]> {
    if y_range.is_degenerate() || marker_count == 0 {
        return SmallVec::from_elem(
            ValueGridline {
                value: y_range.minimum,
                y: mapper.pixel_y(DEGENERATE_NORMALIZED_VALUE),
            },
            1,
        );
    }

    let increment = y_range.spread / marker_count as f64;
    (0..=marker_count)
        .map(|step| {
            let fraction = step as f64 / marker_count as f64;
            ValueGridline {
                value: y_range.minimum + increment * step as f64,
                y: mapper.pixel_y(fraction),
            }
        })
        .collect()
}

/// Formats a gridline value with at most two decimals, trailing zeros trimmed.
#[must_use]
pub fn format_marker_value(value: f64) -> String {
    let value = if value.abs() < 1e-9 { 0.0 } else { value };
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Integer-truncated custom marker label.
#[must_use]
pub fn format_custom_marker_value(value: f64) -> String {
    format!("{}", value.trunc() as i64)
}
