mod axis_label_render_frame_builder;
mod data_controller;
mod draw_sequencer;
mod engine;
mod engine_config;
mod engine_snapshot;
mod json_contract;
mod legend_render_frame_builder;
mod line_series_render_frame_builder;
mod overlay_controller;
mod overlay_render_frame_builder;
mod render_coordinator;
mod render_style;
mod style_controller;
mod validation;

pub use draw_sequencer::RenderStage;
pub use engine::LineChart;
pub use engine_config::{DEFAULT_MARKER_COUNT, LineChartConfig};
pub use engine_snapshot::{ChartSnapshot, SeriesSnapshot};
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
pub use render_style::{ChartStyle, ChartToggles, MAX_AUTO_STROKE_PX, SeriesStyle};
