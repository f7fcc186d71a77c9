use crate::core::types::PlotArea;

/// Maps unit-interval coordinates onto the plot rectangle.
///
/// Pixel Y grows downward while data Y grows upward, so `ny = 1` lands on
/// the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    plot: PlotArea,
    column_count: usize,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(plot: PlotArea, column_count: usize) -> Self {
        Self { plot, column_count }
    }

    #[must_use]
    pub fn plot(self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn column_count(self) -> usize {
        self.column_count
    }

    /// Horizontal distance between adjacent index columns.
    ///
    /// A single column spans the whole plot width.
    #[must_use]
    pub fn column_increment(self) -> f64 {
        if self.column_count > 1 {
            self.plot.width / (self.column_count - 1) as f64
        } else {
            self.plot.width
        }
    }

    #[must_use]
    pub fn pixel_y(self, normalized_y: f64) -> f64 {
        self.plot.top + self.plot.height - normalized_y * self.plot.height
    }

    #[must_use]
    pub fn pixel_x_normalized(self, normalized_x: f64) -> f64 {
        self.plot.left + normalized_x * self.plot.width
    }

    #[must_use]
    pub fn pixel_x_column(self, index: usize) -> f64 {
        self.plot.left + index as f64 * self.column_increment()
    }

    /// Chooses the X/Y path when `normalized_x` is present, the column path otherwise.
    #[must_use]
    pub fn pixel_x(self, index: usize, normalized_x: Option<f64>) -> f64 {
        match normalized_x {
            Some(nx) => self.pixel_x_normalized(nx),
            None => self.pixel_x_column(index),
        }
    }
}
