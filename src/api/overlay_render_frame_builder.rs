use tracing::debug;

use crate::overlay::{
    CustomMarkers, MarkerRole, ReferenceLineRenderer, ReferenceLines, custom_marker_pixel_y,
    format_custom_marker_value, format_marker_value, plan_custom_markers, plan_reference_lines,
    plan_value_gridlines, plan_vertical_markers,
};
use crate::render::{
    CanvasLayerKind, Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign,
};

use super::draw_sequencer::DrawContext;

pub(super) fn append_reference_line_primitives(
    frame: &mut RenderFrame,
    ctx: DrawContext<'_>,
    lines: &ReferenceLines,
    renderer: &dyn ReferenceLineRenderer,
) {
    let style = &ctx.config.style;
    for planned in plan_reference_lines(lines, ctx.mapper) {
        frame.draw_line(
            CanvasLayerKind::ReferenceLines,
            renderer.line_primitive(planned, style.reference_line_color, style.reference_line_width),
        );
    }
}

/// Custom markers when any are set, otherwise the default value gridlines.
pub(super) fn append_value_marker_primitives(
    frame: &mut RenderFrame,
    ctx: DrawContext<'_>,
    markers: &CustomMarkers,
    data_maximum: Option<f64>,
) {
    if markers.is_empty() {
        append_default_gridlines(frame, ctx);
    } else {
        append_custom_markers(frame, ctx, markers, data_maximum);
    }
}

fn append_custom_markers(
    frame: &mut RenderFrame,
    ctx: DrawContext<'_>,
    markers: &CustomMarkers,
    data_maximum: Option<f64>,
) {
    let plot = ctx.config.plot;
    let style = &ctx.config.style;
    let y_range = ctx.ranges.y;
    // Index-only charts have no X range; the Y minimum stands in.
    let zero_reference = ctx.ranges.x.map_or(y_range.minimum, |x| x.minimum);

    for marker in plan_custom_markers(markers, data_maximum) {
        let Some(y) = custom_marker_pixel_y(marker.value, zero_reference, y_range, plot) else {
            debug!(value = marker.value, "custom marker outside plot; skipped");
            continue;
        };
        frame.draw_line(
            CanvasLayerKind::ValueMarkers,
            LinePrimitive::new(
                plot.left,
                y,
                plot.right(),
                y,
                style.marker_line_width,
                marker.color,
            ),
        );
        if ctx.config.toggles.hide_line_numbers {
            continue;
        }

        let text = format_custom_marker_value(marker.value);
        // Cap labels sit right-aligned in the gutter past the plot's right edge.
        let x = match marker.role {
            MarkerRole::Cap => plot.right() + style.label_margin_px + estimated_text_width(ctx, &text),
            MarkerRole::User => plot.left - style.label_margin_px,
        };
        frame.draw_text(
            CanvasLayerKind::ValueMarkers,
            marker_label(ctx, text, x, y, style.font_color),
        );
    }
}

fn append_default_gridlines(frame: &mut RenderFrame, ctx: DrawContext<'_>) {
    if ctx.config.toggles.hide_line_markers {
        return;
    }
    let plot = ctx.config.plot;
    let style = &ctx.config.style;

    for gridline in plan_value_gridlines(ctx.ranges.y, ctx.config.marker_count, ctx.mapper) {
        frame.draw_line(
            CanvasLayerKind::ValueMarkers,
            LinePrimitive::new(
                plot.left,
                gridline.y,
                plot.right(),
                gridline.y,
                style.marker_line_width,
                style.marker_color,
            ),
        );
        if let Some(shadow) = style.marker_shadow_color {
            frame.draw_line(
                CanvasLayerKind::ValueMarkers,
                LinePrimitive::new(
                    plot.left,
                    gridline.y + 1.0,
                    plot.right(),
                    gridline.y + 1.0,
                    style.marker_line_width,
                    shadow,
                ),
            );
        }
        if !ctx.config.toggles.hide_line_numbers {
            frame.draw_text(
                CanvasLayerKind::ValueMarkers,
                marker_label(
                    ctx,
                    format_marker_value(gridline.value),
                    plot.left - style.label_margin_px,
                    gridline.y,
                    style.font_color,
                ),
            );
        }
    }
}

/// Vertical lines behind the series, one per column.
pub(super) fn append_background_column_primitives(frame: &mut RenderFrame, ctx: DrawContext<'_>) {
    let plot = ctx.config.plot;
    let style = &ctx.config.style;
    for x in plan_vertical_markers(ctx.mapper) {
        frame.draw_line(
            CanvasLayerKind::BackgroundColumns,
            LinePrimitive::new(
                x,
                plot.bottom(),
                x,
                plot.top,
                style.marker_line_width,
                style.marker_color,
            ),
        );
        if let Some(shadow) = style.marker_shadow_color {
            frame.draw_line(
                CanvasLayerKind::BackgroundColumns,
                LinePrimitive::new(
                    x + 1.0,
                    plot.bottom(),
                    x + 1.0,
                    plot.top,
                    style.marker_line_width,
                    shadow,
                ),
            );
        }
    }
}

fn marker_label(ctx: DrawContext<'_>, text: String, x: f64, y: f64, color: Color) -> TextPrimitive {
    let style = &ctx.config.style;
    TextPrimitive::new(text, x, y, style.marker_font_size_px, color, TextHAlign::Right)
        .with_v_align(TextVAlign::Middle)
        .with_font_family(style.font_family.clone())
}

fn estimated_text_width(ctx: DrawContext<'_>, text: &str) -> f64 {
    let style = &ctx.config.style;
    text.chars().count() as f64 * style.marker_font_size_px * style.char_width_ratio
}
