use tracing::debug;

use crate::error::ChartResult;
use crate::overlay::{BASELINE_KEY, CustomMarkers, ReferenceLine, ReferenceLines};
use crate::render::{Color, Renderer};

use super::LineChart;

impl<R: Renderer> LineChart<R> {
    /// Inserts or replaces a named reference line.
    ///
    /// The key `baseline` addresses the same entry as the baseline accessors.
    pub fn set_reference_line(
        &mut self,
        key: impl Into<String>,
        line: ReferenceLine,
    ) -> ChartResult<()> {
        let key = key.into();
        debug!(key = %key, value = ?line.value, index = ?line.index, "set reference line");
        self.reference_lines.insert(key, line)
    }

    pub fn remove_reference_line(&mut self, key: &str) -> Option<ReferenceLine> {
        self.reference_lines.remove(key)
    }

    #[must_use]
    pub fn reference_line(&self, key: &str) -> Option<&ReferenceLine> {
        self.reference_lines.get(key)
    }

    #[must_use]
    pub fn reference_lines(&self) -> &ReferenceLines {
        &self.reference_lines
    }

    #[must_use]
    pub fn baseline_value(&self) -> Option<f64> {
        self.reference_lines.baseline_value()
    }

    /// Sets the baseline value, creating the entry if absent.
    pub fn set_baseline_value(&mut self, value: f64) -> ChartResult<()> {
        debug!(key = BASELINE_KEY, value, "set baseline value");
        self.reference_lines.set_baseline_value(value)
    }

    #[must_use]
    pub fn baseline_color(&self) -> Option<Color> {
        self.reference_lines.baseline_color()
    }

    /// Sets the baseline color, creating the entry if absent.
    pub fn set_baseline_color(&mut self, color: Color) -> ChartResult<()> {
        self.reference_lines.set_baseline_color(color)
    }

    /// Adds a custom value marker. Any custom marker replaces the default
    /// evenly spaced gridlines.
    pub fn set_custom_marker(&mut self, value: f64, color: Color) -> ChartResult<()> {
        self.custom_markers.insert(value, color)
    }

    /// Replaces every custom marker. Nothing changes if any entry is invalid.
    pub fn set_custom_markers(
        &mut self,
        markers: impl IntoIterator<Item = (f64, Color)>,
    ) -> ChartResult<()> {
        let mut next = CustomMarkers::default();
        for (value, color) in markers {
            next.insert(value, color)?;
        }
        debug!(count = next.len(), "replace custom markers");
        self.custom_markers = next;
        Ok(())
    }

    pub fn clear_custom_markers(&mut self) {
        self.custom_markers.clear();
    }

    #[must_use]
    pub fn custom_markers(&self) -> &CustomMarkers {
        &self.custom_markers
    }
}
