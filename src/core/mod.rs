pub mod mapper;
pub mod normalize;
pub mod primitives;
pub mod range;
pub mod series;
pub mod types;

pub use mapper::CoordinateMapper;
pub use normalize::{NormalizedDataset, NormalizedPoint};
pub use primitives::{decimal_to_f64, decimal_values_to_f64};
pub use range::{
    AxisBounds, AxisRange, DEGENERATE_NORMALIZED_VALUE, ResolvedRanges, resolve_x_range,
    resolve_y_range,
};
pub use series::{DEFAULT_SERIES_PALETTE, Dataset, SeriesStore};
pub use types::{PlotArea, PlotMargins, Viewport};
