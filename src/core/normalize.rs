use crate::core::range::ResolvedRanges;
use crate::core::series::Dataset;

/// Unit-interval coordinate: `x` is `None` for index-placed points, `y` is
/// `None` for gaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPoint {
    pub index: usize,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Normalized view over one dataset. Nothing is computed until iterated.
#[derive(Debug, Clone, Copy)]
pub struct NormalizedDataset<'a> {
    dataset: &'a Dataset,
    ranges: &'a ResolvedRanges,
}

impl<'a> NormalizedDataset<'a> {
    #[must_use]
    pub fn new(dataset: &'a Dataset, ranges: &'a ResolvedRanges) -> Self {
        Self { dataset, ranges }
    }

    #[must_use]
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Points in dataset order; gaps keep their position.
    pub fn coordinates(&self) -> impl Iterator<Item = NormalizedPoint> + use<'a> {
        let y_range = self.ranges.y;
        let x_range = self.ranges.x;
        let x_points = self.dataset.x_points.as_deref();

        self.dataset
            .y_points
            .iter()
            .enumerate()
            .map(move |(index, y)| NormalizedPoint {
                index,
                x: x_points
                    .zip(x_range)
                    .and_then(|(xs, range)| xs.get(index).map(|&x| range.normalize(x))),
                y: y.map(|value| y_range.normalize(value)),
            })
    }
}
