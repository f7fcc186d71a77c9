use std::collections::BTreeSet;

use crate::render::{CanvasLayerKind, RenderFrame, TextHAlign, TextPrimitive, TextVAlign};

use super::LineChartConfig;
use super::draw_sequencer::DrawContext;

/// Centered message drawn instead of the chart when no series has a value.
pub(super) fn append_no_data_primitives(frame: &mut RenderFrame, config: &LineChartConfig) {
    let style = &config.style;
    if style.no_data_message.is_empty() {
        return;
    }
    frame.draw_text(
        CanvasLayerKind::Placeholder,
        TextPrimitive::new(
            style.no_data_message.clone(),
            f64::from(config.viewport.width) / 2.0,
            f64::from(config.viewport.height) / 2.0,
            style.title_font_size_px,
            style.font_color,
            TextHAlign::Center,
        )
        .with_v_align(TextVAlign::Middle)
        .with_font_family(style.font_family.clone()),
    );
}

pub(super) fn append_title_primitives(frame: &mut RenderFrame, config: &LineChartConfig) {
    if config.toggles.hide_title {
        return;
    }
    let Some(title) = config.title.as_deref().filter(|t| !t.is_empty()) else {
        return;
    };
    let style = &config.style;
    frame.draw_text(
        CanvasLayerKind::Title,
        TextPrimitive::new(
            title,
            f64::from(config.viewport.width) / 2.0,
            style.title_margin_px,
            style.title_font_size_px,
            style.font_color,
            TextHAlign::Center,
        )
        .with_font_family(style.font_family.clone()),
    );
}

/// X-axis title under the column labels, Y-axis title in the left gutter.
pub(super) fn append_axis_title_primitives(frame: &mut RenderFrame, ctx: DrawContext<'_>) {
    let config = ctx.config;
    let style = &config.style;
    let plot = config.plot;

    if let Some(label) = config.x_axis_label.as_deref().filter(|l| !l.is_empty()) {
        let y = plot.bottom() + style.label_margin_px * 2.0 + style.marker_font_size_px;
        frame.draw_text(
            CanvasLayerKind::AxisTitles,
            TextPrimitive::new(
                label,
                plot.left + plot.width / 2.0,
                y,
                style.marker_font_size_px,
                style.font_color,
                TextHAlign::Center,
            )
            .with_font_family(style.font_family.clone()),
        );
    }

    if let Some(label) = config.y_axis_label.as_deref().filter(|l| !l.is_empty()) {
        frame.draw_text(
            CanvasLayerKind::AxisTitles,
            TextPrimitive::new(
                label,
                style.label_margin_px,
                plot.top + plot.height / 2.0,
                style.marker_font_size_px,
                style.font_color,
                TextHAlign::Left,
            )
            .with_v_align(TextVAlign::Middle)
            .with_font_family(style.font_family.clone()),
        );
    }
}

/// Emits the configured label for `index` once per render pass.
pub(super) fn append_column_label(
    frame: &mut RenderFrame,
    ctx: DrawContext<'_>,
    index: usize,
    x: f64,
    labels_seen: &mut BTreeSet<usize>,
) {
    let config = ctx.config;
    let Some(label) = config.labels.get(&index).filter(|l| !l.is_empty()) else {
        return;
    };
    if !labels_seen.insert(index) {
        return;
    }
    let style = &config.style;
    frame.draw_text(
        CanvasLayerKind::Series,
        TextPrimitive::new(
            label.as_str(),
            x,
            config.plot.bottom() + style.label_margin_px,
            style.marker_font_size_px,
            style.font_color,
            TextHAlign::Center,
        )
        .with_font_family(style.font_family.clone()),
    );
}
