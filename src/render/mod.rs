mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;

pub use frame::{DrawPrimitive, FrameCommand, RenderFrame};
pub use layer_stack::{CanvasLayerKind, LineChartLayerStack};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, DotPrimitive, DotShape, LinePrimitive, LineStrokeStyle, TextHAlign, TextPrimitive,
    TextVAlign,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame`;
/// `render` is the flush point for every line, dot and text call the chart
/// recorded during one pass.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
