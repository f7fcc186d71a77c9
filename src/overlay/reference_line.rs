use indexmap::IndexMap;
use tracing::trace;

use crate::core::{AxisRange, CoordinateMapper};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive, LineStrokeStyle};

/// Reserved key with dedicated value/color accessors.
pub const BASELINE_KEY: &str = "baseline";

/// Fixed overlay line at a data value (horizontal) and/or a column index
/// (vertical).
///
/// A line with neither `value` nor `index` is kept but not drawn; this is the
/// state `baseline` starts in when only its color has been set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceLine {
    pub value: Option<f64>,
    pub index: Option<usize>,
    pub color: Option<Color>,
    pub width: Option<f64>,
    /// Unit-interval position of `value`, written by the normalizer.
    computed_norm_value: Option<f64>,
}

impl ReferenceLine {
    #[must_use]
    pub fn horizontal(value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn vertical(index: usize) -> Self {
        Self {
            index: Some(index),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn computed_norm_value(&self) -> Option<f64> {
        self.computed_norm_value
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(value) = self.value {
            if !value.is_finite() {
                return Err(ChartError::InvalidInput(
                    "reference line value must be finite".to_owned(),
                ));
            }
        }
        if let Some(width) = self.width {
            if !width.is_finite() || width <= 0.0 {
                return Err(ChartError::InvalidInput(
                    "reference line width must be finite and > 0".to_owned(),
                ));
            }
        }
        if let Some(color) = self.color {
            color.validate()?;
        }
        Ok(())
    }
}

/// Reference lines keyed by identifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceLines {
    lines: IndexMap<String, ReferenceLine>,
}

impl ReferenceLines {
    pub fn insert(&mut self, key: impl Into<String>, line: ReferenceLine) -> ChartResult<()> {
        line.validate()?;
        self.lines.insert(key.into(), line);
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Option<ReferenceLine> {
        self.lines.shift_remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ReferenceLine> {
        self.lines.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReferenceLine)> {
        self.lines.iter().map(|(key, line)| (key.as_str(), line))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Values that must stay inside the resolved Y range.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.lines.values().filter_map(|line| line.value)
    }

    #[must_use]
    pub fn baseline_value(&self) -> Option<f64> {
        self.get(BASELINE_KEY).and_then(|line| line.value)
    }

    #[must_use]
    pub fn baseline_color(&self) -> Option<Color> {
        self.get(BASELINE_KEY).and_then(|line| line.color)
    }

    pub fn set_baseline_value(&mut self, value: f64) -> ChartResult<()> {
        if !value.is_finite() {
            return Err(ChartError::InvalidInput(
                "baseline value must be finite".to_owned(),
            ));
        }
        self.baseline_entry().value = Some(value);
        Ok(())
    }

    pub fn set_baseline_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.baseline_entry().color = Some(color);
        Ok(())
    }

    /// Get-or-insert for the `baseline` entry. A fresh entry has no value,
    /// index, color or width.
    fn baseline_entry(&mut self) -> &mut ReferenceLine {
        self.lines.entry(BASELINE_KEY.to_owned()).or_default()
    }

    /// Caches each horizontal line's normalized position against `y_range`.
    ///
    /// Vertical placement is resolved from the column index at draw time and is
    /// not normalized here.
    pub fn normalize(&mut self, y_range: AxisRange) {
        for (key, line) in &mut self.lines {
            line.computed_norm_value = line.value.map(|value| y_range.normalize(value));
            trace!(key = %key, norm = ?line.computed_norm_value, "normalized reference line");
        }
    }
}

/// Pixel geometry of one reference line, before styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedReferenceLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: Option<Color>,
    pub width: Option<f64>,
}

/// Full-width lines at normalized values and full-height lines at column indexes.
#[must_use]
pub fn plan_reference_lines(
    lines: &ReferenceLines,
    mapper: CoordinateMapper,
) -> Vec<PlannedReferenceLine> {
    let plot = mapper.plot();
    let mut planned = Vec::new();
    for (_, line) in lines.iter() {
        if let Some(norm) = line.computed_norm_value {
            let y = mapper.pixel_y(norm);
            planned.push(PlannedReferenceLine {
                x1: plot.left,
                y1: y,
                x2: plot.right(),
                y2: y,
                color: line.color,
                width: line.width,
            });
        }
        if let Some(index) = line.index {
            let x = plot.left + mapper.column_increment() * index as f64;
            planned.push(PlannedReferenceLine {
                x1: x,
                y1: plot.bottom(),
                x2: x,
                y2: plot.top,
                color: line.color,
                width: line.width,
            });
        }
    }
    planned
}

/// Stroke treatment for reference lines.
pub trait ReferenceLineRenderer: std::fmt::Debug {
    fn stroke_style(&self) -> LineStrokeStyle;

    fn line_primitive(
        &self,
        planned: PlannedReferenceLine,
        default_color: Color,
        default_width: f64,
    ) -> LinePrimitive {
        LinePrimitive::new(
            planned.x1,
            planned.y1,
            planned.x2,
            planned.y2,
            planned.width.unwrap_or(default_width),
            planned.color.unwrap_or(default_color),
        )
        .with_stroke_style(self.stroke_style())
    }
}

/// Dashed reference lines used by generic chart variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashedReferenceLines;

impl ReferenceLineRenderer for DashedReferenceLines {
    fn stroke_style(&self) -> LineStrokeStyle {
        LineStrokeStyle::Dashed
    }
}

/// Solid reference lines; the line chart default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidReferenceLines;

impl ReferenceLineRenderer for SolidReferenceLines {
    fn stroke_style(&self) -> LineStrokeStyle {
        LineStrokeStyle::Solid
    }
}
