use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::series::SeriesStore;
use crate::error::{ChartError, ChartResult};

/// Normalized position used for every value of a zero-spread range.
pub const DEGENERATE_NORMALIZED_VALUE: f64 = 0.5;

/// Resolved minimum/maximum of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub minimum: f64,
    pub maximum: f64,
    pub spread: f64,
}

impl AxisRange {
    #[must_use]
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self {
            minimum,
            maximum,
            spread: maximum - minimum,
        }
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.spread == 0.0
    }

    /// Maps `value` into the unit interval.
    ///
    /// A zero spread places every value at the center instead of dividing by zero.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return DEGENERATE_NORMALIZED_VALUE;
        }
        (value - self.minimum) / self.spread
    }

    #[must_use]
    pub fn denormalize(self, normalized: f64) -> f64 {
        self.minimum + normalized * self.spread
    }

    #[must_use]
    pub fn extended_to(self, value: f64) -> Self {
        Self::new(self.minimum.min(value), self.maximum.max(value))
    }
}

/// User-set axis bounds that replace the data-derived aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisBounds {
    #[serde(default)]
    pub minimum: Option<f64>,
    #[serde(default)]
    pub maximum: Option<f64>,
}

impl AxisBounds {
    #[must_use]
    pub const fn new(minimum: Option<f64>, maximum: Option<f64>) -> Self {
        Self { minimum, maximum }
    }

    pub fn validate(self, axis: &str) -> ChartResult<Self> {
        for bound in [self.minimum, self.maximum].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(ChartError::InvalidInput(format!(
                    "{axis} axis bounds must be finite"
                )));
            }
        }
        if let (Some(minimum), Some(maximum)) = (self.minimum, self.maximum) {
            if minimum > maximum {
                return Err(ChartError::InvalidInput(format!(
                    "{axis} axis minimum {minimum} exceeds maximum {maximum}"
                )));
            }
        }
        Ok(self)
    }

    fn apply(self, axis: &str, data_minimum: f64, data_maximum: f64) -> AxisRange {
        let minimum = self.minimum.unwrap_or(data_minimum);
        let maximum = self.maximum.unwrap_or(data_maximum);
        if minimum > maximum {
            warn!(axis, minimum, maximum, "single-sided bound crosses data; collapsing range");
            return AxisRange::new(maximum, maximum);
        }
        AxisRange::new(minimum, maximum)
    }
}

/// Ranges the normalizer works against for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRanges {
    pub y: AxisRange,
    /// Present only when some dataset carries X data.
    pub x: Option<AxisRange>,
}

/// Y range from data (or user bounds), widened so no reference value is clipped.
///
/// Returns `None` when the store holds no present Y value.
#[must_use]
pub fn resolve_y_range(
    store: &SeriesStore,
    bounds: AxisBounds,
    reference_values: impl IntoIterator<Item = f64>,
) -> Option<AxisRange> {
    let (data_minimum, data_maximum) = (store.min_y()?, store.max_y()?);
    let range = reference_values
        .into_iter()
        .fold(bounds.apply("y", data_minimum, data_maximum), AxisRange::extended_to);
    trace!(
        minimum = range.minimum,
        maximum = range.maximum,
        "resolved y range"
    );
    Some(range)
}

/// X range for X/Y data; `None` selects the index-based placement path.
#[must_use]
pub fn resolve_x_range(store: &SeriesStore, bounds: AxisBounds) -> Option<AxisRange> {
    if !store.has_xy_data() {
        return None;
    }
    let (data_minimum, data_maximum) = (store.min_x()?, store.max_x()?);
    let range = bounds.apply("x", data_minimum, data_maximum);
    trace!(
        minimum = range.minimum,
        maximum = range.maximum,
        "resolved x range"
    );
    Some(range)
}

#[cfg(test)]
mod tests {
    use super::{AxisBounds, AxisRange, resolve_x_range, resolve_y_range};
    use crate::core::SeriesStore;

    #[test]
    fn degenerate_range_centers_values() {
        let range = AxisRange::new(3.0, 3.0);
        assert!(range.is_degenerate());
        assert_eq!(range.normalize(3.0), 0.5);
        assert_eq!(range.normalize(-100.0), 0.5);
    }

    #[test]
    fn user_bounds_replace_data_aggregate() {
        let mut store = SeriesStore::default();
        store
            .add("a", vec![Some(2.0), Some(8.0)], None, None)
            .expect("add");
        let range = resolve_y_range(&store, AxisBounds::new(Some(0.0), None), [])
            .expect("range");
        assert_eq!(range, AxisRange::new(0.0, 8.0));
    }

    #[test]
    fn reference_values_extend_both_ends() {
        let mut store = SeriesStore::default();
        store
            .add("a", vec![Some(2.0), Some(8.0)], None, None)
            .expect("add");
        let range =
            resolve_y_range(&store, AxisBounds::default(), [-1.0, 12.0]).expect("range");
        assert_eq!(range, AxisRange::new(-1.0, 12.0));
    }

    #[test]
    fn index_only_store_has_no_x_range() {
        let mut store = SeriesStore::default();
        store.add("a", vec![Some(1.0)], None, None).expect("add");
        assert_eq!(resolve_x_range(&store, AxisBounds::default()), None);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert!(AxisBounds::new(Some(5.0), Some(1.0)).validate("y").is_err());
        assert!(AxisBounds::new(Some(f64::NAN), None).validate("y").is_err());
    }
}
