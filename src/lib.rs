//! linechart-rs: line and XY chart layout engine.
//!
//! Series are normalized into the unit interval, mapped onto a plot
//! rectangle and recorded as an ordered list of draw commands. The command
//! list is handed to a pluggable [`render::Renderer`]; a cairo backend is
//! available behind the `cairo-backend` feature.

pub mod api;
pub mod core;
pub mod error;
pub mod overlay;
pub mod render;
pub mod telemetry;

pub use api::{LineChart, LineChartConfig};
pub use error::{ChartError, ChartResult};
