//! Overlay planning: reference lines, value gridlines and background columns.
//!
//! Planners return pixel geometry only; styling and primitive emission happen
//! in the draw pipeline.

pub mod reference_line;
pub mod value_markers;
pub mod vertical_markers;

pub use reference_line::{
    BASELINE_KEY, DashedReferenceLines, PlannedReferenceLine, ReferenceLine,
    ReferenceLineRenderer, ReferenceLines, SolidReferenceLines, plan_reference_lines,
};
pub use value_markers::{
    CAP_MARKER_COLOR, CustomMarkers, MarkerRole, PlannedMarker, ValueGridline,
    custom_marker_pixel_y, format_custom_marker_value, format_marker_value, plan_custom_markers,
    plan_value_gridlines,
};
pub use vertical_markers::plan_vertical_markers;
