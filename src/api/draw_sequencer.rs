use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CoordinateMapper, ResolvedRanges};

use super::LineChartConfig;

/// Render pass states, in the only order they may be entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RenderStage {
    Idle,
    NoData,
    HasData,
    RangeResolved,
    Normalized,
    LayoutComputed,
    OverlaysDrawn,
    LegendDrawn,
    MarkersDrawn,
    AxisLabelsDrawn,
    TitleDrawn,
    BackgroundColumnsDrawn,
    SeriesDrawn,
    Flushed,
}

/// Forward-only tracker for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct DrawSequencer {
    stage: RenderStage,
    visited: Vec<RenderStage>,
}

impl Default for DrawSequencer {
    fn default() -> Self {
        Self {
            stage: RenderStage::Idle,
            visited: Vec::new(),
        }
    }
}

impl DrawSequencer {
    pub(super) fn enter(&mut self, next: RenderStage) {
        debug_assert!(
            next > self.stage,
            "render stage {next:?} entered after {:?}",
            self.stage
        );
        trace!(from = ?self.stage, to = ?next, "render stage");
        self.stage = next;
        self.visited.push(next);
    }

    pub(super) fn into_visited(self) -> Vec<RenderStage> {
        self.visited
    }
}

/// Read-only inputs shared by every draw stage of one pass.
#[derive(Debug, Clone, Copy)]
pub(super) struct DrawContext<'a> {
    pub config: &'a LineChartConfig,
    pub ranges: &'a ResolvedRanges,
    pub mapper: CoordinateMapper,
}
