use crate::core::SeriesStore;
use crate::error::ChartResult;
use crate::overlay::{CustomMarkers, ReferenceLineRenderer, ReferenceLines, SolidReferenceLines};
use crate::render::{RenderFrame, Renderer};

use super::render_coordinator::RenderCoordinator;
use super::validation::validate_config;
use super::{ChartSnapshot, LineChartConfig, RenderStage};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `LineChart` owns the series store, reference lines and custom markers,
/// and drives one full layout-and-draw pass per `render` call. Rendering
/// takes `&mut self` because it caches normalized reference-line positions;
/// concurrent renders need separate chart instances.
pub struct LineChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: LineChartConfig,
    pub(super) store: SeriesStore,
    pub(super) reference_lines: ReferenceLines,
    pub(super) custom_markers: CustomMarkers,
    pub(super) reference_line_renderer: Box<dyn ReferenceLineRenderer>,
    pub(super) last_stages: Vec<RenderStage>,
    pub(super) last_snapshot: Option<ChartSnapshot>,
}

impl<R: Renderer> LineChart<R> {
    /// Builds a chart that draws solid reference lines.
    pub fn new(renderer: R, config: LineChartConfig) -> ChartResult<Self> {
        Self::with_reference_line_renderer(renderer, config, Box::new(SolidReferenceLines))
    }

    pub fn with_reference_line_renderer(
        renderer: R,
        config: LineChartConfig,
        reference_line_renderer: Box<dyn ReferenceLineRenderer>,
    ) -> ChartResult<Self> {
        validate_config(&config)?;
        let store = SeriesStore::with_palette(config.style.palette.clone());
        Ok(Self {
            renderer,
            config,
            store,
            reference_lines: ReferenceLines::default(),
            custom_markers: CustomMarkers::default(),
            reference_line_renderer,
            last_stages: Vec::new(),
            last_snapshot: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }

    /// Replaces the configuration; rejected configs leave the chart unchanged.
    pub fn set_config(&mut self, config: LineChartConfig) -> ChartResult<()> {
        validate_config(&config)?;
        if config.style.palette != self.config.style.palette {
            self.store.set_palette(config.style.palette.clone());
        }
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn series(&self) -> &SeriesStore {
        &self.store
    }

    /// Runs the full pipeline and flushes the frame to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        RenderCoordinator::render(self)
    }

    /// Runs the pipeline without flushing, returning the recorded frame.
    pub fn build_frame(&mut self) -> ChartResult<RenderFrame> {
        RenderCoordinator::build_frame(self)
    }

    /// Renders the frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = RenderCoordinator::build_frame(self)?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.last_stages.push(RenderStage::Flushed);
        Ok(())
    }

    /// Stages entered by the most recent pass.
    #[must_use]
    pub fn last_render_stages(&self) -> &[RenderStage] {
        &self.last_stages
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
