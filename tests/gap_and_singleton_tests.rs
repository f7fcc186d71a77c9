use linechart_rs::api::{ChartToggles, LineChart, LineChartConfig, MAX_AUTO_STROKE_PX};
use linechart_rs::core::{PlotArea, Viewport};
use linechart_rs::render::{
    CanvasLayerKind, DotPrimitive, DotShape, DrawPrimitive, LinePrimitive, NullRenderer,
    RenderFrame, TextPrimitive,
};

fn chart_with_labels(labels: &[(usize, &str)]) -> LineChart<NullRenderer> {
    let config = LineChartConfig::new(Viewport::new(100, 140), PlotArea::new(0.0, 0.0, 100.0, 100.0))
        .with_toggles(ChartToggles {
            hide_legend: true,
            hide_line_markers: true,
            ..ChartToggles::default()
        })
        .with_labels(labels.iter().map(|(i, l)| (*i, (*l).to_owned())));
    LineChart::new(NullRenderer::default(), config).expect("chart init")
}

fn series_lines(frame: &RenderFrame) -> Vec<LinePrimitive> {
    frame
        .layer_commands(CanvasLayerKind::Series)
        .filter_map(|cmd| match &cmd.primitive {
            DrawPrimitive::Line(line) => Some(*line),
            _ => None,
        })
        .collect()
}

fn series_dots(frame: &RenderFrame) -> Vec<DotPrimitive> {
    frame
        .layer_commands(CanvasLayerKind::Series)
        .filter_map(|cmd| match &cmd.primitive {
            DrawPrimitive::Dot(dot) => Some(*dot),
            _ => None,
        })
        .collect()
}

fn series_texts(frame: &RenderFrame) -> Vec<TextPrimitive> {
    frame
        .layer_commands(CanvasLayerKind::Series)
        .filter_map(|cmd| match &cmd.primitive {
            DrawPrimitive::Text(text) => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn gap_between_two_points_draws_no_segment() {
    let mut chart = chart_with_labels(&[(0, "a"), (1, "b"), (2, "c")]);
    chart
        .add("s", vec![Some(5.0), None, Some(7.0)], None)
        .expect("add");

    let frame = chart.build_frame().expect("frame");
    assert!(series_lines(&frame).is_empty());
    assert_eq!(series_dots(&frame).len(), 2);

    let labels: Vec<String> = series_texts(&frame).into_iter().map(|t| t.text).collect();
    assert_eq!(labels, vec!["a", "b", "c"]);
}

#[test]
fn segments_stop_at_gap_and_resume_after_it() {
    let mut chart = chart_with_labels(&[]);
    chart
        .add("s", vec![Some(5.0), Some(6.0), None, Some(7.0)], None)
        .expect("add");

    let frame = chart.build_frame().expect("frame");
    let lines = series_lines(&frame);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].x1, 0.0);
    assert!((lines[0].x2 - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(series_dots(&frame).len(), 3);
}

#[test]
fn singleton_keeps_its_dot_when_dots_are_hidden() {
    let mut chart = chart_with_labels(&[]);
    chart
        .add("single", vec![None, Some(4.0), None], None)
        .expect("add");
    chart.add("pair", vec![Some(1.0), Some(4.0)], None).expect("add");
    chart.set_hide_dots(true);

    let frame = chart.build_frame().expect("frame");
    let dots = series_dots(&frame);
    assert_eq!(dots.len(), 1);
    assert_eq!(dots[0].x, 50.0);
    assert_eq!(dots[0].y, 0.0);
    assert_eq!(series_lines(&frame).len(), 1);
}

#[test]
fn hidden_lines_leave_dots() {
    let mut chart = chart_with_labels(&[]);
    chart
        .add("s", vec![Some(1.0), Some(2.0), Some(3.0)], None)
        .expect("add");
    chart.set_hide_lines(true);

    let frame = chart.build_frame().expect("frame");
    assert!(series_lines(&frame).is_empty());
    assert_eq!(series_dots(&frame).len(), 3);
}

#[test]
fn column_labels_are_emitted_once_per_pass() {
    let mut chart = chart_with_labels(&[(0, "Q1"), (1, "Q2")]);
    chart.add("a", vec![Some(1.0), Some(2.0)], None).expect("add");
    chart.add("b", vec![Some(2.0), Some(3.0)], None).expect("add");

    let frame = chart.build_frame().expect("frame");
    let texts = series_texts(&frame);
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].text, "Q1");
    assert_eq!((texts[0].x, texts[0].y), (0.0, 110.0));
    assert_eq!(texts[1].x, 100.0);
}

#[test]
fn xy_series_skip_column_labels() {
    let mut chart = chart_with_labels(&[(0, "Q1"), (1, "Q2")]);
    chart
        .add_xy("xy", vec![0.0, 1.0], vec![Some(1.0), Some(2.0)], None)
        .expect("add");

    let frame = chart.build_frame().expect("frame");
    assert!(series_texts(&frame).is_empty());
}

#[test]
fn stroke_and_dot_size_follow_density() {
    let mut chart = chart_with_labels(&[]);
    chart
        .add("dense", (0..100).map(|i: i32| Some(f64::from(i))).collect(), None)
        .expect("add");
    chart
        .add("sparse", vec![Some(0.0), Some(50.0), Some(99.0)], None)
        .expect("add");

    let frame = chart.build_frame().expect("frame");
    let lines = series_lines(&frame);
    assert_eq!(lines[0].stroke_width, 100.0 / (100.0 * 4.0));
    assert_eq!(lines.last().expect("sparse").stroke_width, MAX_AUTO_STROKE_PX);

    let dots = series_dots(&frame);
    assert_eq!(dots[0].radius, 100.0 / (100.0 * 2.5));
    assert_eq!(dots.last().expect("sparse").radius, MAX_AUTO_STROKE_PX);
}

#[test]
fn explicit_series_style_overrides_density() {
    let mut chart = chart_with_labels(&[]);
    chart.add("s", vec![Some(1.0), Some(2.0)], None).expect("add");
    chart.set_line_width(Some(1.5)).expect("line width");
    chart.set_dot_radius(Some(2.0)).expect("dot radius");
    chart.set_dot_style(DotShape::Square);
    assert!(chart.set_line_width(Some(-1.0)).is_err());
    assert_eq!(chart.series_style().line_width, Some(1.5));

    let frame = chart.build_frame().expect("frame");
    assert!(series_lines(&frame).iter().all(|l| l.stroke_width == 1.5));
    assert!(series_dots(&frame)
        .iter()
        .all(|d| d.radius == 2.0 && d.shape == DotShape::Square));
}
