use std::collections::BTreeSet;

use tracing::trace;

use crate::core::SeriesStore;
use crate::render::{CanvasLayerKind, DotPrimitive, LinePrimitive, RenderFrame};

use super::axis_label_render_frame_builder::append_column_label;
use super::draw_sequencer::DrawContext;

/// Segments and point markers for every series, in store order.
///
/// A gap clears the previous point, so no segment ever crosses a missing
/// value. Index-placed points also emit their column label.
pub(super) fn append_line_series_primitives(
    frame: &mut RenderFrame,
    ctx: DrawContext<'_>,
    store: &SeriesStore,
) {
    let toggles = ctx.config.toggles;
    let series_style = ctx.config.series_style;
    let available_width = ctx.config.plot.width;
    let mut labels_seen = BTreeSet::new();

    for normalized in store.normalize(ctx.ranges) {
        let dataset = normalized.dataset();
        let indexed = !dataset.is_xy();
        let always_dot = dataset.is_singleton();
        let stroke_width = series_style.stroke_width(available_width, dataset.len());
        let dot_radius = series_style.dot_radius(available_width, dataset.len());
        let mut previous: Option<(f64, f64)> = None;

        trace!(
            series = %dataset.name,
            points = dataset.len(),
            stroke_width,
            dot_radius,
            "draw series"
        );

        for point in normalized.coordinates() {
            let x = if indexed {
                let x = ctx.mapper.pixel_x_column(point.index);
                append_column_label(frame, ctx, point.index, x, &mut labels_seen);
                x
            } else {
                ctx.mapper.pixel_x(point.index, point.x)
            };

            let Some(normalized_y) = point.y else {
                previous = None;
                continue;
            };
            let y = ctx.mapper.pixel_y(normalized_y);

            if !toggles.hide_lines {
                if let Some((previous_x, previous_y)) = previous {
                    frame.draw_line(
                        CanvasLayerKind::Series,
                        LinePrimitive::new(previous_x, previous_y, x, y, stroke_width, dataset.color),
                    );
                }
            }
            if !toggles.hide_dots || always_dot {
                frame.draw_dot(
                    CanvasLayerKind::Series,
                    DotPrimitive::new(series_style.dot_style, x, y, dot_radius, dataset.color),
                );
            }
            previous = Some((x, y));
        }
    }
}
