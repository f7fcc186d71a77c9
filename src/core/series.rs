use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::normalize::NormalizedDataset;
use crate::core::range::ResolvedRanges;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors handed out, in order, to series added without an explicit color.
pub const DEFAULT_SERIES_PALETTE: [Color; 7] = [
    Color::rgb(0.20, 0.40, 0.80),
    Color::rgb(0.86, 0.22, 0.07),
    Color::rgb(1.00, 0.60, 0.00),
    Color::rgb(0.06, 0.59, 0.09),
    Color::rgb(0.60, 0.00, 0.60),
    Color::rgb(0.00, 0.60, 0.78),
    Color::rgb(0.87, 0.27, 0.47),
];

/// One named sequence of plotted values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub y_points: Vec<Option<f64>>,
    /// Paired X coordinates. `None` selects index-based column placement.
    pub x_points: Option<Vec<f64>>,
    pub color: Color,
}

impl Dataset {
    #[must_use]
    pub fn is_xy(&self) -> bool {
        self.x_points.is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.y_points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.y_points.is_empty()
    }

    /// Present (non-gap) Y values in order.
    pub fn present_y(&self) -> impl Iterator<Item = f64> + '_ {
        self.y_points.iter().flatten().copied()
    }

    #[must_use]
    pub fn present_count(&self) -> usize {
        self.present_y().count()
    }

    /// A series with exactly one present value always shows its point marker.
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.present_count() == 1
    }
}

/// Ordered, name-unique collection of datasets.
///
/// Insertion order is both legend order and draw order.
#[derive(Debug, Clone)]
pub struct SeriesStore {
    datasets: IndexMap<String, Dataset>,
    palette: Vec<Color>,
}

impl Default for SeriesStore {
    fn default() -> Self {
        Self::with_palette(DEFAULT_SERIES_PALETTE.to_vec())
    }
}

impl SeriesStore {
    #[must_use]
    pub fn with_palette(palette: Vec<Color>) -> Self {
        Self {
            datasets: IndexMap::new(),
            palette,
        }
    }

    /// Appends a dataset after validating it; the store is untouched on error.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        y_values: Vec<Option<f64>>,
        color: Option<Color>,
        x_values: Option<Vec<f64>>,
    ) -> ChartResult<()> {
        let name = name.into();
        if self.datasets.contains_key(&name) {
            return Err(ChartError::InvalidInput(format!(
                "series `{name}` already exists"
            )));
        }
        if let Some(x_values) = &x_values {
            if x_values.is_empty() && !y_values.is_empty() {
                return Err(ChartError::InvalidInput(format!(
                    "series `{name}` has y values but empty x values"
                )));
            }
            if x_values.len() != y_values.len() {
                return Err(ChartError::InvalidInput(format!(
                    "series `{name}` x/y length mismatch: {} x values, {} y values",
                    x_values.len(),
                    y_values.len()
                )));
            }
            if x_values.iter().any(|x| !x.is_finite()) {
                return Err(ChartError::InvalidInput(format!(
                    "series `{name}` x values must be finite"
                )));
            }
        }
        if y_values.iter().flatten().any(|y| !y.is_finite()) {
            return Err(ChartError::InvalidInput(format!(
                "series `{name}` y values must be finite or absent"
            )));
        }
        let color = match color {
            Some(color) => {
                color.validate()?;
                color
            }
            None => self.next_palette_color(),
        };

        debug!(
            series = %name,
            points = y_values.len(),
            xy = x_values.is_some(),
            "add series"
        );
        self.datasets.insert(
            name.clone(),
            Dataset {
                name,
                y_points: y_values,
                x_points: x_values,
                color,
            },
        );
        Ok(())
    }

    pub fn add_xy(
        &mut self,
        name: impl Into<String>,
        x_values: Vec<f64>,
        y_values: Vec<Option<f64>>,
        color: Option<Color>,
    ) -> ChartResult<()> {
        self.add(name, y_values, color, Some(x_values))
    }

    /// Paired shorthand: `[(x, y), ...]` is transposed into separate sequences.
    /// A `None` y keeps its x slot and breaks the line there.
    pub fn add_pairs(
        &mut self,
        name: impl Into<String>,
        pairs: &[(f64, Option<f64>)],
        color: Option<Color>,
    ) -> ChartResult<()> {
        let (x_values, y_values): (Vec<f64>, Vec<Option<f64>>) = pairs.iter().copied().unzip();
        self.add_xy(name, x_values, y_values, color)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Dataset> {
        self.datasets.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn clear(&mut self) {
        self.datasets.clear();
    }

    /// Palette used for datasets added later; existing colors are kept.
    pub fn set_palette(&mut self, palette: Vec<Color>) {
        self.palette = palette;
    }

    /// True when at least one dataset has a present Y value to plot.
    #[must_use]
    pub fn has_plottable_data(&self) -> bool {
        self.iter().any(|dataset| dataset.present_count() > 0)
    }

    #[must_use]
    pub fn has_xy_data(&self) -> bool {
        self.iter().any(Dataset::is_xy)
    }

    /// Largest point count across all series.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.iter().map(Dataset::len).max().unwrap_or(0)
    }

    #[must_use]
    pub fn max_y(&self) -> Option<f64> {
        self.iter().flat_map(Dataset::present_y).reduce(f64::max)
    }

    #[must_use]
    pub fn min_y(&self) -> Option<f64> {
        self.iter().flat_map(Dataset::present_y).reduce(f64::min)
    }

    /// Largest X over datasets carrying X data; index-based series are ignored.
    #[must_use]
    pub fn max_x(&self) -> Option<f64> {
        self.x_values().reduce(f64::max)
    }

    #[must_use]
    pub fn min_x(&self) -> Option<f64> {
        self.x_values().reduce(f64::min)
    }

    /// Lazily normalized view of every dataset, in store order.
    pub fn normalize<'a>(
        &'a self,
        ranges: &'a ResolvedRanges,
    ) -> impl Iterator<Item = NormalizedDataset<'a>> + 'a {
        self.iter()
            .map(move |dataset| NormalizedDataset::new(dataset, ranges))
    }

    fn x_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter()
            .filter_map(|dataset| dataset.x_points.as_deref())
            .flatten()
            .copied()
    }

    fn next_palette_color(&self) -> Color {
        if self.palette.is_empty() {
            return Color::BLACK;
        }
        self.palette[self.datasets.len() % self.palette.len()]
    }
}
