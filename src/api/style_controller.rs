use std::collections::BTreeMap;

use tracing::debug;

use crate::core::AxisBounds;
use crate::error::{ChartError, ChartResult};
use crate::render::{DotShape, Renderer};

use super::validation::validate_series_style;
use super::{ChartToggles, LineChart, SeriesStyle};

impl<R: Renderer> LineChart<R> {
    #[must_use]
    pub fn toggles(&self) -> ChartToggles {
        self.config.toggles
    }

    pub fn set_toggles(&mut self, toggles: ChartToggles) {
        self.config.toggles = toggles;
    }

    pub fn set_hide_dots(&mut self, hide: bool) {
        self.config.toggles.hide_dots = hide;
    }

    pub fn set_hide_lines(&mut self, hide: bool) {
        self.config.toggles.hide_lines = hide;
    }

    /// Hides value labels next to gridlines and custom markers.
    pub fn set_hide_line_numbers(&mut self, hide: bool) {
        self.config.toggles.hide_line_numbers = hide;
    }

    /// Hides the default evenly spaced gridlines. Custom markers still draw.
    pub fn set_hide_line_markers(&mut self, hide: bool) {
        self.config.toggles.hide_line_markers = hide;
    }

    pub fn set_hide_legend(&mut self, hide: bool) {
        self.config.toggles.hide_legend = hide;
    }

    pub fn set_hide_title(&mut self, hide: bool) {
        self.config.toggles.hide_title = hide;
    }

    pub fn set_show_vertical_markers(&mut self, show: bool) {
        self.config.toggles.show_vertical_markers = show;
    }

    #[must_use]
    pub fn series_style(&self) -> SeriesStyle {
        self.config.series_style
    }

    /// Fixed stroke width; `None` restores density-based sizing.
    pub fn set_line_width(&mut self, line_width: Option<f64>) -> ChartResult<()> {
        let next = validate_series_style(SeriesStyle {
            line_width,
            ..self.config.series_style
        })?;
        self.config.series_style = next;
        Ok(())
    }

    /// Fixed dot radius; `None` restores density-based sizing.
    pub fn set_dot_radius(&mut self, dot_radius: Option<f64>) -> ChartResult<()> {
        let next = validate_series_style(SeriesStyle {
            dot_radius,
            ..self.config.series_style
        })?;
        self.config.series_style = next;
        Ok(())
    }

    pub fn set_dot_style(&mut self, dot_style: DotShape) {
        self.config.series_style.dot_style = dot_style;
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.config.title = title;
    }

    pub fn set_axis_labels(&mut self, x_axis_label: Option<String>, y_axis_label: Option<String>) {
        self.config.x_axis_label = x_axis_label;
        self.config.y_axis_label = y_axis_label;
    }

    /// Replaces the column labels drawn under index-placed series.
    pub fn set_labels(&mut self, labels: impl IntoIterator<Item = (usize, String)>) {
        self.config.labels = labels.into_iter().collect::<BTreeMap<_, _>>();
    }

    pub fn set_y_bounds(&mut self, minimum: Option<f64>, maximum: Option<f64>) -> ChartResult<()> {
        let bounds = AxisBounds::new(minimum, maximum).validate("y")?;
        debug!(minimum = ?bounds.minimum, maximum = ?bounds.maximum, "set y bounds");
        self.config.y_bounds = bounds;
        Ok(())
    }

    pub fn set_x_bounds(&mut self, minimum: Option<f64>, maximum: Option<f64>) -> ChartResult<()> {
        let bounds = AxisBounds::new(minimum, maximum).validate("x")?;
        debug!(minimum = ?bounds.minimum, maximum = ?bounds.maximum, "set x bounds");
        self.config.x_bounds = bounds;
        Ok(())
    }

    /// Number of default gridline intervals; must be at least one.
    pub fn set_marker_count(&mut self, marker_count: usize) -> ChartResult<()> {
        if marker_count == 0 {
            return Err(ChartError::InvalidInput(
                "marker_count must be >= 1".to_owned(),
            ));
        }
        self.config.marker_count = marker_count;
        Ok(())
    }
}
