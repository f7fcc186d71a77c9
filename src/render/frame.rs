use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CanvasLayerKind, DotPrimitive, LinePrimitive, TextPrimitive};

/// One drawing call recorded by the chart pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawPrimitive {
    Line(LinePrimitive),
    Dot(DotPrimitive),
    Text(TextPrimitive),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameCommand {
    pub layer: CanvasLayerKind,
    pub primitive: DrawPrimitive,
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Commands keep call order: backends must paint them front to back exactly
/// as recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub commands: Vec<FrameCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn draw_line(&mut self, layer: CanvasLayerKind, line: LinePrimitive) {
        self.commands.push(FrameCommand {
            layer,
            primitive: DrawPrimitive::Line(line),
        });
    }

    pub fn draw_dot(&mut self, layer: CanvasLayerKind, dot: DotPrimitive) {
        self.commands.push(FrameCommand {
            layer,
            primitive: DrawPrimitive::Dot(dot),
        });
    }

    pub fn draw_text(&mut self, layer: CanvasLayerKind, text: TextPrimitive) {
        self.commands.push(FrameCommand {
            layer,
            primitive: DrawPrimitive::Text(text),
        });
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|cmd| match &cmd.primitive {
            DrawPrimitive::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn dots(&self) -> impl Iterator<Item = &DotPrimitive> {
        self.commands.iter().filter_map(|cmd| match &cmd.primitive {
            DrawPrimitive::Dot(dot) => Some(dot),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|cmd| match &cmd.primitive {
            DrawPrimitive::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Commands recorded by one canvas layer, in call order.
    pub fn layer_commands(
        &self,
        layer: CanvasLayerKind,
    ) -> impl Iterator<Item = &FrameCommand> + '_ {
        self.commands.iter().filter(move |cmd| cmd.layer == layer)
    }

    /// Distinct layers in first-seen order.
    #[must_use]
    pub fn layer_sequence(&self) -> Vec<CanvasLayerKind> {
        let mut sequence: Vec<CanvasLayerKind> = Vec::new();
        for cmd in &self.commands {
            if sequence.last() != Some(&cmd.layer) {
                sequence.push(cmd.layer);
            }
        }
        sequence
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for window in self.commands.windows(2) {
            if window[1].layer < window[0].layer {
                return Err(ChartError::InvalidGeometry(format!(
                    "layer {:?} recorded after {:?}",
                    window[1].layer, window[0].layer
                )));
            }
        }

        for cmd in &self.commands {
            match &cmd.primitive {
                DrawPrimitive::Line(line) => line.validate()?,
                DrawPrimitive::Dot(dot) => dot.validate()?,
                DrawPrimitive::Text(text) => text.validate()?,
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
