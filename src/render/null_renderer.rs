use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates frame content and keeps the last flushed frame so tests
/// can inspect geometry without a raster backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_dot_count: usize,
    pub last_text_count: usize,
    pub flush_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines().count();
        self.last_dot_count = frame.dots().count();
        self.last_text_count = frame.texts().count();
        self.flush_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
