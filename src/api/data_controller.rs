use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::core::decimal_values_to_f64;
use crate::error::ChartResult;
use crate::render::{Color, Renderer};

use super::LineChart;

impl<R: Renderer> LineChart<R> {
    /// Adds an index-placed series; `None` entries are gaps.
    ///
    /// Rejected input leaves the chart unchanged.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        y_values: Vec<Option<f64>>,
        color: Option<Color>,
    ) -> ChartResult<()> {
        let name = name.into();
        self.store
            .add(name.clone(), y_values, color, None)
            .inspect_err(|err| warn!(series = %name, error = %err, "rejected series"))
    }

    /// Adds a series with paired X coordinates.
    pub fn add_xy(
        &mut self,
        name: impl Into<String>,
        x_values: Vec<f64>,
        y_values: Vec<Option<f64>>,
        color: Option<Color>,
    ) -> ChartResult<()> {
        let name = name.into();
        self.store
            .add_xy(name.clone(), x_values, y_values, color)
            .inspect_err(|err| warn!(series = %name, error = %err, "rejected xy series"))
    }

    /// Adds a series from `(x, y)` pairs; `None` marks a gap.
    pub fn add_pairs(
        &mut self,
        name: impl Into<String>,
        pairs: &[(f64, Option<f64>)],
        color: Option<Color>,
    ) -> ChartResult<()> {
        let name = name.into();
        self.store
            .add_pairs(name.clone(), pairs, color)
            .inspect_err(|err| warn!(series = %name, error = %err, "rejected paired series"))
    }

    /// Adds an index-placed series from decimal samples.
    pub fn add_decimal(
        &mut self,
        name: impl Into<String>,
        y_values: &[Option<Decimal>],
        color: Option<Color>,
    ) -> ChartResult<()> {
        let y_values = decimal_values_to_f64(y_values)?;
        self.add(name, y_values, color)
    }

    /// Discards every series. Reference lines and custom markers are kept.
    pub fn reset_data(&mut self) {
        debug!(series = self.store.len(), "reset series data");
        self.store.clear();
    }
}
