use serde::{Deserialize, Serialize};

/// Canvas pass that produced a primitive.
///
/// Variants are declared in paint order; a well-formed frame never records a
/// layer after a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Placeholder,
    ReferenceLines,
    Legend,
    ValueMarkers,
    AxisTitles,
    Title,
    BackgroundColumns,
    Series,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineChartLayerStack {
    pub layers: Vec<CanvasLayerKind>,
}

impl LineChartLayerStack {
    /// Paint order for a chart that has data.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                CanvasLayerKind::ReferenceLines,
                CanvasLayerKind::Legend,
                CanvasLayerKind::ValueMarkers,
                CanvasLayerKind::AxisTitles,
                CanvasLayerKind::Title,
                CanvasLayerKind::BackgroundColumns,
                CanvasLayerKind::Series,
            ],
        }
    }

    #[must_use]
    pub fn position(&self, layer: CanvasLayerKind) -> Option<usize> {
        self.layers.iter().position(|candidate| *candidate == layer)
    }
}

#[cfg(test)]
mod tests {
    use super::{CanvasLayerKind, LineChartLayerStack};

    #[test]
    fn canonical_stack_is_sorted_by_paint_order() {
        let stack = LineChartLayerStack::canonical();
        let mut sorted = stack.layers.clone();
        sorted.sort();
        assert_eq!(stack.layers, sorted);
    }

    #[test]
    fn background_columns_precede_series() {
        let stack = LineChartLayerStack::canonical();
        let columns = stack
            .position(CanvasLayerKind::BackgroundColumns)
            .expect("columns layer");
        let series = stack.position(CanvasLayerKind::Series).expect("series layer");
        assert!(columns < series);
        assert_eq!(stack.position(CanvasLayerKind::Placeholder), None);
    }
}
