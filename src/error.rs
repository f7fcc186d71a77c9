use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    /// Rejected data or configuration. Raised before any chart state changes.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A materialized draw primitive carries non-finite or negative geometry.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("render backend failure: {0}")]
    Backend(String),

    #[error("serialization failure: {0}")]
    Serialization(String),
}
