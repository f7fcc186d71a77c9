use approx::assert_abs_diff_eq;
use linechart_rs::api::{ChartToggles, LineChart, LineChartConfig};
use linechart_rs::core::{CoordinateMapper, PlotArea, Viewport};
use linechart_rs::render::{CanvasLayerKind, DrawPrimitive, NullRenderer, RenderFrame};

fn square_chart() -> LineChart<NullRenderer> {
    let config = LineChartConfig::new(Viewport::new(100, 100), PlotArea::new(0.0, 0.0, 100.0, 100.0))
        .with_toggles(ChartToggles {
            hide_legend: true,
            ..ChartToggles::default()
        });
    LineChart::new(NullRenderer::default(), config).expect("chart init")
}

fn series_dots(frame: &RenderFrame) -> Vec<(f64, f64)> {
    frame
        .layer_commands(CanvasLayerKind::Series)
        .filter_map(|cmd| match &cmd.primitive {
            DrawPrimitive::Dot(dot) => Some((dot.x, dot.y)),
            _ => None,
        })
        .collect()
}

#[test]
fn two_series_map_onto_plot_corners() {
    let mut chart = square_chart();
    chart
        .add("A", vec![Some(1.0), Some(2.0), Some(3.0)], None)
        .expect("add A");
    chart
        .add("B", vec![Some(3.0), Some(2.0), Some(1.0)], None)
        .expect("add B");

    let frame = chart.build_frame().expect("frame");
    let snapshot = chart.snapshot().expect("snapshot");
    assert_eq!(snapshot.column_increment, Some(50.0));
    assert_eq!(snapshot.column_count, 3);

    let dots = series_dots(&frame);
    assert_eq!(dots.len(), 6);
    assert_eq!(dots[0], (0.0, 100.0));
    assert_eq!(dots[1], (50.0, 50.0));
    assert_eq!(dots[2], (100.0, 0.0));
    assert_eq!(dots[3], (0.0, 0.0));
    assert_eq!(dots[5], (100.0, 100.0));
}

#[test]
fn xy_series_use_normalized_x() {
    let mut chart = square_chart();
    chart
        .add_xy(
            "xy",
            vec![0.0, 2.5, 10.0],
            vec![Some(0.0), Some(5.0), Some(10.0)],
            None,
        )
        .expect("add");

    let frame = chart.build_frame().expect("frame");
    let dots = series_dots(&frame);
    assert_eq!(dots, vec![(0.0, 100.0), (25.0, 50.0), (100.0, 0.0)]);
}

#[test]
fn offset_plot_shifts_pixels() {
    let mapper = CoordinateMapper::new(PlotArea::new(70.0, 80.0, 200.0, 100.0), 5);
    assert_abs_diff_eq!(mapper.column_increment(), 50.0);
    assert_abs_diff_eq!(mapper.pixel_x_column(4), 270.0);
    assert_abs_diff_eq!(mapper.pixel_x(4, Some(0.5)), 170.0);
    assert_abs_diff_eq!(mapper.pixel_y(0.0), 180.0);
    assert_abs_diff_eq!(mapper.pixel_y(1.0), 80.0);
}

#[test]
fn segments_join_consecutive_dots() {
    let mut chart = square_chart();
    chart
        .add("A", vec![Some(0.0), Some(10.0)], None)
        .expect("add");
    let frame = chart.build_frame().expect("frame");

    let segments: Vec<_> = frame
        .layer_commands(CanvasLayerKind::Series)
        .filter_map(|cmd| match &cmd.primitive {
            DrawPrimitive::Line(line) => Some((line.x1, line.y1, line.x2, line.y2)),
            _ => None,
        })
        .collect();
    assert_eq!(segments, vec![(0.0, 100.0, 100.0, 0.0)]);
}
