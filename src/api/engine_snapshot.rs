use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, CoordinateMapper, PlotArea, ResolvedRanges, Viewport};
use crate::render::Renderer;

use super::LineChart;

/// Per-series facts recorded by a render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub points: usize,
    pub present_points: usize,
    pub xy: bool,
    pub singleton: bool,
}

/// Serializable deterministic layout snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub y_range: Option<AxisRange>,
    pub x_range: Option<AxisRange>,
    pub column_count: usize,
    pub column_increment: Option<f64>,
    pub reference_norm_values: IndexMap<String, Option<f64>>,
    pub series: IndexMap<String, SeriesSnapshot>,
}

impl<R: Renderer> LineChart<R> {
    /// Layout captured by the most recent render pass.
    #[must_use]
    pub fn snapshot(&self) -> Option<&ChartSnapshot> {
        self.last_snapshot.as_ref()
    }
}

pub(super) fn capture_snapshot<R: Renderer>(
    chart: &LineChart<R>,
    ranges: Option<ResolvedRanges>,
    mapper: Option<CoordinateMapper>,
) -> ChartSnapshot {
    ChartSnapshot {
        viewport: chart.config.viewport,
        plot: chart.config.plot,
        y_range: ranges.map(|r| r.y),
        x_range: ranges.and_then(|r| r.x),
        column_count: chart.store.column_count(),
        column_increment: mapper.map(CoordinateMapper::column_increment),
        reference_norm_values: chart
            .reference_lines
            .iter()
            .map(|(key, line)| (key.to_owned(), line.computed_norm_value()))
            .collect(),
        series: chart
            .store
            .iter()
            .map(|dataset| {
                (
                    dataset.name.clone(),
                    SeriesSnapshot {
                        points: dataset.len(),
                        present_points: dataset.present_count(),
                        xy: dataset.is_xy(),
                        singleton: dataset.is_singleton(),
                    },
                )
            })
            .collect(),
    }
}
