use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{AxisBounds, PlotArea, PlotMargins, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::DotShape;

use super::{ChartStyle, ChartToggles, SeriesStyle};

/// Default number of value gridline intervals.
pub const DEFAULT_MARKER_COUNT: usize = 4;

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub viewport: Viewport,
    pub plot: PlotArea,
    #[serde(default)]
    pub style: ChartStyle,
    #[serde(default)]
    pub toggles: ChartToggles,
    #[serde(default)]
    pub series_style: SeriesStyle,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub x_axis_label: Option<String>,
    #[serde(default)]
    pub y_axis_label: Option<String>,
    /// Column labels by index, drawn under the plot for index-placed series.
    #[serde(default)]
    pub labels: BTreeMap<usize, String>,
    #[serde(default)]
    pub y_bounds: AxisBounds,
    #[serde(default)]
    pub x_bounds: AxisBounds,
    #[serde(default = "default_marker_count")]
    pub marker_count: usize,
}

impl LineChartConfig {
    /// Creates a config with an explicit plot rectangle.
    #[must_use]
    pub fn new(viewport: Viewport, plot: PlotArea) -> Self {
        Self {
            viewport,
            plot,
            style: ChartStyle::default(),
            toggles: ChartToggles::default(),
            series_style: SeriesStyle::default(),
            title: None,
            x_axis_label: None,
            y_axis_label: None,
            labels: BTreeMap::new(),
            y_bounds: AxisBounds::default(),
            x_bounds: AxisBounds::default(),
            marker_count: default_marker_count(),
        }
    }

    /// Creates a config whose plot is the viewport minus default margins.
    pub fn for_viewport(viewport: Viewport) -> ChartResult<Self> {
        let plot = PlotArea::inset(viewport, PlotMargins::default())?;
        Ok(Self::new(viewport, plot))
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_toggles(mut self, toggles: ChartToggles) -> Self {
        self.toggles = toggles;
        self
    }

    #[must_use]
    pub fn with_series_style(mut self, series_style: SeriesStyle) -> Self {
        self.series_style = series_style;
        self
    }

    #[must_use]
    pub fn with_dot_style(mut self, dot_style: DotShape) -> Self {
        self.series_style.dot_style = dot_style;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = (usize, String)>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_axis_labels(
        mut self,
        x_axis_label: Option<String>,
        y_axis_label: Option<String>,
    ) -> Self {
        self.x_axis_label = x_axis_label;
        self.y_axis_label = y_axis_label;
        self
    }

    /// Sets user Y bounds (`minimum_value` / `maximum_value`).
    #[must_use]
    pub fn with_y_bounds(mut self, minimum: Option<f64>, maximum: Option<f64>) -> Self {
        self.y_bounds = AxisBounds::new(minimum, maximum);
        self
    }

    /// Sets user X bounds (`minimum_x_value` / `maximum_x_value`).
    #[must_use]
    pub fn with_x_bounds(mut self, minimum: Option<f64>, maximum: Option<f64>) -> Self {
        self.x_bounds = AxisBounds::new(minimum, maximum);
        self
    }

    #[must_use]
    pub fn with_marker_count(mut self, marker_count: usize) -> Self {
        self.marker_count = marker_count;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidInput(format!("failed to parse chart config json: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize chart config: {e}"))
        })
    }
}

fn default_marker_count() -> usize {
    DEFAULT_MARKER_COUNT
}
