use crate::core::SeriesStore;
use crate::render::{
    CanvasLayerKind, DotPrimitive, DotShape, RenderFrame, TextHAlign, TextPrimitive, TextVAlign,
};

use super::LineChartConfig;

/// Swatch plus name per series, left to right above the plot in store order.
pub(super) fn append_legend_primitives(
    frame: &mut RenderFrame,
    config: &LineChartConfig,
    store: &SeriesStore,
) {
    if config.toggles.hide_legend {
        return;
    }
    let style = &config.style;
    let box_size = style.legend_box_size_px;
    let y = (config.plot.top - style.label_margin_px - box_size / 2.0).max(box_size / 2.0);
    let mut x = config.plot.left;

    for dataset in store.iter() {
        frame.draw_dot(
            CanvasLayerKind::Legend,
            DotPrimitive::new(
                DotShape::Square,
                x + box_size / 2.0,
                y,
                box_size / 2.0,
                dataset.color,
            ),
        );

        let text_x = x + box_size + box_size / 2.0;
        if !dataset.name.is_empty() {
            frame.draw_text(
                CanvasLayerKind::Legend,
                TextPrimitive::new(
                    dataset.name.as_str(),
                    text_x,
                    y,
                    style.legend_font_size_px,
                    style.font_color,
                    TextHAlign::Left,
                )
                .with_v_align(TextVAlign::Middle)
                .with_font_family(style.font_family.clone()),
            );
        }

        let text_width = dataset.name.chars().count() as f64
            * style.legend_font_size_px
            * style.char_width_ratio;
        x = text_x + text_width + style.legend_spacing_px;
    }
}
