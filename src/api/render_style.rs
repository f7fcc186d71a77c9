use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_SERIES_PALETTE;
use crate::render::{Color, DotShape};

/// Fonts, colors and spacing shared by every draw stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub font_family: String,
    pub font_color: Color,
    pub title_font_size_px: f64,
    pub legend_font_size_px: f64,
    pub marker_font_size_px: f64,
    /// Gridline and background-column color.
    pub marker_color: Color,
    /// Drawn one pixel off each gridline when set.
    pub marker_shadow_color: Option<Color>,
    pub marker_line_width: f64,
    pub reference_line_color: Color,
    pub reference_line_width: f64,
    /// Gap between plot edges and the labels placed around them.
    pub label_margin_px: f64,
    pub title_margin_px: f64,
    pub legend_box_size_px: f64,
    pub legend_spacing_px: f64,
    /// Average glyph advance as a fraction of font size, used to lay out the legend.
    pub char_width_ratio: f64,
    pub no_data_message: String,
    pub palette: Vec<Color>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            font_family: "Sans".to_owned(),
            font_color: Color::BLACK,
            title_font_size_px: 24.0,
            legend_font_size_px: 14.0,
            marker_font_size_px: 12.0,
            marker_color: Color::rgb(0.75, 0.75, 0.75),
            marker_shadow_color: None,
            marker_line_width: 1.0,
            reference_line_color: Color::rgb(0.86, 0.08, 0.24),
            reference_line_width: 5.0,
            label_margin_px: 10.0,
            title_margin_px: 12.0,
            legend_box_size_px: 12.0,
            legend_spacing_px: 20.0,
            char_width_ratio: 0.6,
            no_data_message: "No Data".to_owned(),
            palette: DEFAULT_SERIES_PALETTE.to_vec(),
        }
    }
}

/// Global hide/show switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartToggles {
    pub hide_line_numbers: bool,
    pub hide_line_markers: bool,
    pub hide_legend: bool,
    pub hide_title: bool,
    pub hide_dots: bool,
    pub hide_lines: bool,
    pub show_vertical_markers: bool,
}

/// Per-chart stroke and point-marker overrides.
///
/// `None` sizes strokes and dots from point density.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesStyle {
    pub line_width: Option<f64>,
    pub dot_radius: Option<f64>,
    pub dot_style: DotShape,
}

/// Ceiling for density-derived stroke widths and dot radii.
pub const MAX_AUTO_STROKE_PX: f64 = 5.0;
const STROKE_WIDTH_DIVISOR: f64 = 4.0;
const DOT_RADIUS_DIVISOR: f64 = 2.5;

impl SeriesStyle {
    /// Override, or `available_width / (points * 4)` capped at 5px.
    #[must_use]
    pub fn stroke_width(self, available_width: f64, point_count: usize) -> f64 {
        self.line_width.unwrap_or_else(|| {
            auto_size(available_width, point_count, STROKE_WIDTH_DIVISOR)
        })
    }

    /// Override, or `available_width / (points * 2.5)` capped at 5px.
    #[must_use]
    pub fn dot_radius(self, available_width: f64, point_count: usize) -> f64 {
        self.dot_radius.unwrap_or_else(|| {
            auto_size(available_width, point_count, DOT_RADIUS_DIVISOR)
        })
    }
}

fn auto_size(available_width: f64, point_count: usize, divisor: f64) -> f64 {
    let points = point_count.max(1) as f64;
    (available_width / (points * divisor)).min(MAX_AUTO_STROKE_PX)
}

#[cfg(test)]
mod tests {
    use super::SeriesStyle;

    #[test]
    fn dense_series_get_thinner_strokes() {
        let style = SeriesStyle::default();
        assert_eq!(style.stroke_width(800.0, 3), 5.0);
        assert_eq!(style.stroke_width(800.0, 400), 0.5);
        assert_eq!(style.dot_radius(800.0, 400), 0.8);
    }

    #[test]
    fn overrides_win_over_density() {
        let style = SeriesStyle {
            line_width: Some(7.0),
            dot_radius: Some(9.0),
            ..SeriesStyle::default()
        };
        assert_eq!(style.stroke_width(800.0, 400), 7.0);
        assert_eq!(style.dot_radius(800.0, 3), 9.0);
    }
}
