use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidInput(format!("{field_name} cannot be represented as f64"))
    })
}

/// Converts optional decimal samples, keeping gaps in place.
pub fn decimal_values_to_f64(values: &[Option<Decimal>]) -> ChartResult<Vec<Option<f64>>> {
    values
        .iter()
        .map(|value| value.map(|v| decimal_to_f64(v, "series value")).transpose())
        .collect()
}
