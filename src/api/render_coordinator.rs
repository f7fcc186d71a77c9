use tracing::{debug, warn};

use crate::core::{CoordinateMapper, ResolvedRanges, resolve_x_range, resolve_y_range};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::LineChart;
use super::axis_label_render_frame_builder::{
    append_axis_title_primitives, append_no_data_primitives, append_title_primitives,
};
use super::draw_sequencer::{DrawContext, DrawSequencer, RenderStage};
use super::engine_snapshot::capture_snapshot;
use super::legend_render_frame_builder::append_legend_primitives;
use super::line_series_render_frame_builder::append_line_series_primitives;
use super::overlay_render_frame_builder::{
    append_background_column_primitives, append_reference_line_primitives,
    append_value_marker_primitives,
};
use super::validation::validate_config;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    pub(super) fn render<R: Renderer>(chart: &mut LineChart<R>) -> ChartResult<()> {
        let frame = Self::build_frame(chart)?;
        if let Err(err) = chart.renderer.render(&frame) {
            warn!(error = %err, "renderer rejected frame");
            return Err(err);
        }
        chart.last_stages.push(RenderStage::Flushed);
        Ok(())
    }

    /// Walks the draw state machine and records every primitive in order.
    pub(super) fn build_frame<R: Renderer>(chart: &mut LineChart<R>) -> ChartResult<RenderFrame> {
        validate_config(&chart.config)?;

        let mut sequencer = DrawSequencer::default();
        let mut frame = RenderFrame::new(chart.config.viewport);

        let y_range = resolve_y_range(
            &chart.store,
            chart.config.y_bounds,
            chart.reference_lines.values(),
        );
        let Some(y) = y_range else {
            sequencer.enter(RenderStage::NoData);
            debug!(series = chart.store.len(), "no plottable data; drawing placeholder");
            append_no_data_primitives(&mut frame, &chart.config);
            chart.last_snapshot = Some(capture_snapshot(chart, None, None));
            chart.last_stages = sequencer.into_visited();
            return Ok(frame);
        };
        sequencer.enter(RenderStage::HasData);

        let ranges = ResolvedRanges {
            y,
            x: resolve_x_range(&chart.store, chart.config.x_bounds),
        };
        sequencer.enter(RenderStage::RangeResolved);

        chart.reference_lines.normalize(ranges.y);
        sequencer.enter(RenderStage::Normalized);

        let mapper = CoordinateMapper::new(chart.config.plot, chart.store.column_count());
        sequencer.enter(RenderStage::LayoutComputed);
        debug!(
            y_min = ranges.y.minimum,
            y_max = ranges.y.maximum,
            xy = ranges.x.is_some(),
            columns = mapper.column_count(),
            "layout computed"
        );

        draw_layers(&mut frame, &mut sequencer, chart, &ranges, mapper);

        chart.last_snapshot = Some(capture_snapshot(chart, Some(ranges), Some(mapper)));
        chart.last_stages = sequencer.into_visited();
        Ok(frame)
    }
}

fn draw_layers<R: Renderer>(
    frame: &mut RenderFrame,
    sequencer: &mut DrawSequencer,
    chart: &LineChart<R>,
    ranges: &ResolvedRanges,
    mapper: CoordinateMapper,
) {
    let ctx = DrawContext {
        config: &chart.config,
        ranges,
        mapper,
    };

    append_reference_line_primitives(
        frame,
        ctx,
        &chart.reference_lines,
        chart.reference_line_renderer.as_ref(),
    );
    sequencer.enter(RenderStage::OverlaysDrawn);

    append_legend_primitives(frame, &chart.config, &chart.store);
    sequencer.enter(RenderStage::LegendDrawn);

    append_value_marker_primitives(frame, ctx, &chart.custom_markers, chart.store.max_y());
    sequencer.enter(RenderStage::MarkersDrawn);

    append_axis_title_primitives(frame, ctx);
    sequencer.enter(RenderStage::AxisLabelsDrawn);

    append_title_primitives(frame, &chart.config);
    sequencer.enter(RenderStage::TitleDrawn);

    if chart.config.toggles.show_vertical_markers {
        append_background_column_primitives(frame, ctx);
        sequencer.enter(RenderStage::BackgroundColumnsDrawn);
    }

    append_line_series_primitives(frame, ctx, &chart.store);
    sequencer.enter(RenderStage::SeriesDrawn);
}
