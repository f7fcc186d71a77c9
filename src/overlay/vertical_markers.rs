use crate::core::CoordinateMapper;

/// X positions of the background column lines.
///
/// Walks from the right edge leftward one `column_increment` at a time,
/// `column_count + 1` steps: one line per column plus the boundary line.
/// Positions past the left edge are clamped onto it so every line stays
/// inside the plot.
#[must_use]
pub fn plan_vertical_markers(mapper: CoordinateMapper) -> Vec<f64> {
    let plot = mapper.plot();
    let increment = mapper.column_increment();

    (0..=mapper.column_count())
        .map(|step| (plot.right() - step as f64 * increment).max(plot.left))
        .collect()
}
