use approx::assert_abs_diff_eq;
use linechart_rs::api::{ChartStyle, ChartToggles, LineChart, LineChartConfig};
use linechart_rs::core::{PlotArea, Viewport};
use linechart_rs::overlay::{CAP_MARKER_COLOR, CustomMarkers, MarkerRole, plan_custom_markers};
use linechart_rs::render::{
    CanvasLayerKind, Color, DrawPrimitive, LinePrimitive, NullRenderer, RenderFrame, TextHAlign,
    TextPrimitive,
};

const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

fn chart() -> LineChart<NullRenderer> {
    let config = LineChartConfig::new(Viewport::new(200, 120), PlotArea::new(0.0, 0.0, 100.0, 100.0))
        .with_toggles(ChartToggles {
            hide_legend: true,
            ..ChartToggles::default()
        });
    LineChart::new(NullRenderer::default(), config).expect("chart init")
}

fn marker_lines(frame: &RenderFrame) -> Vec<LinePrimitive> {
    frame
        .layer_commands(CanvasLayerKind::ValueMarkers)
        .filter_map(|cmd| match &cmd.primitive {
            DrawPrimitive::Line(line) => Some(*line),
            _ => None,
        })
        .collect()
}

fn marker_texts(frame: &RenderFrame) -> Vec<TextPrimitive> {
    frame
        .layer_commands(CanvasLayerKind::ValueMarkers)
        .filter_map(|cmd| match &cmd.primitive {
            DrawPrimitive::Text(text) => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn cap_marker_added_when_data_exceeds_largest_marker() {
    let mut chart = chart();
    chart.add("a", vec![Some(0.0), Some(15.0)], None).expect("add");
    chart.set_custom_marker(10.0, BLUE).expect("marker");

    let frame = chart.build_frame().expect("frame");
    let lines = marker_lines(&frame);
    assert_eq!(lines.len(), 2);
    assert_abs_diff_eq!(lines[0].y1, 100.0 - 100.0 * 10.0 / 15.0, epsilon = 1e-9);
    assert_eq!(lines[0].color, BLUE);
    assert_eq!(lines[1].y1, 0.0);
    assert_eq!(lines[1].color, CAP_MARKER_COLOR);

    let texts = marker_texts(&frame);
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].text, "10");
    assert_eq!(texts[1].text, "15");
    assert_eq!(texts[1].h_align, TextHAlign::Right);
    assert!(texts[1].x > 100.0);
    assert!(texts[0].x < 0.0 + 1e-9);

    // The stored markers are not touched by the cap.
    assert_eq!(chart.custom_markers().len(), 1);
}

#[test]
fn no_cap_when_largest_marker_covers_data() {
    let mut markers = CustomMarkers::default();
    markers.insert(5.0, BLUE).expect("insert");
    markers.insert(10.0, BLUE).expect("insert");
    let planned = plan_custom_markers(&markers, Some(10.0));
    assert_eq!(planned.len(), 2);
    assert!(planned.iter().all(|m| m.role == MarkerRole::User));

    let planned = plan_custom_markers(&markers, Some(10.2));
    assert_eq!(planned.len(), 3);
    assert_eq!(planned[2].value, 11.0);
    assert_eq!(planned[2].role, MarkerRole::Cap);
}

#[test]
fn xy_chart_measures_markers_from_x_minimum() {
    let mut chart = chart();
    chart
        .add_xy("xy", vec![100.0, 200.0], vec![Some(0.0), Some(10.0)], None)
        .expect("add");
    chart.set_custom_marker(105.0, BLUE).expect("marker");

    let frame = chart.build_frame().expect("frame");
    let lines = marker_lines(&frame);
    // (105 - x_min 100) / y_spread 10 = 0.5; max 10 is below 105 so no cap.
    assert_eq!(lines.len(), 1);
    assert_abs_diff_eq!(lines[0].y1, 50.0);
}

#[test]
fn markers_outside_plot_are_skipped() {
    let mut chart = chart();
    chart.add("a", vec![Some(0.0), Some(10.0)], None).expect("add");
    chart
        .set_custom_markers([(5.0, BLUE), (25.0, BLUE)])
        .expect("markers");

    let frame = chart.build_frame().expect("frame");
    let lines = marker_lines(&frame);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].y1, 50.0);
}

#[test]
fn flat_data_places_markers_at_center() {
    let mut chart = chart();
    chart.add("flat", vec![Some(5.0), Some(5.0)], None).expect("add");
    chart.set_custom_marker(3.0, BLUE).expect("marker");

    let frame = chart.build_frame().expect("frame");
    let lines = marker_lines(&frame);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.y1 == 50.0));
}

#[test]
fn hidden_line_numbers_drop_marker_labels() {
    let mut chart = chart();
    chart.add("a", vec![Some(0.0), Some(15.0)], None).expect("add");
    chart.set_custom_marker(10.0, BLUE).expect("marker");
    chart.set_hide_line_numbers(true);

    let frame = chart.build_frame().expect("frame");
    assert_eq!(marker_lines(&frame).len(), 2);
    assert!(marker_texts(&frame).is_empty());
}

#[test]
fn invalid_marker_batch_keeps_previous_markers() {
    let mut chart = chart();
    chart.set_custom_marker(1.0, BLUE).expect("marker");
    assert!(chart
        .set_custom_markers([(2.0, BLUE), (f64::NAN, BLUE)])
        .is_err());
    assert_eq!(chart.custom_markers().iter().collect::<Vec<_>>(), vec![(1.0, BLUE)]);

    chart.clear_custom_markers();
    assert!(chart.custom_markers().is_empty());
}

#[test]
fn default_gridlines_span_range_in_even_steps() {
    let mut chart = chart();
    chart.add("a", vec![Some(0.0), Some(8.0)], None).expect("add");

    let frame = chart.build_frame().expect("frame");
    let ys: Vec<f64> = marker_lines(&frame).iter().map(|l| l.y1).collect();
    assert_eq!(ys, vec![100.0, 75.0, 50.0, 25.0, 0.0]);
    let labels: Vec<String> = marker_texts(&frame).into_iter().map(|t| t.text).collect();
    assert_eq!(labels, vec!["0", "2", "4", "6", "8"]);
    assert!(marker_lines(&frame)
        .iter()
        .all(|l| l.color == ChartStyle::default().marker_color));
}

#[test]
fn flat_data_gets_single_centered_gridline() {
    let mut chart = chart();
    chart.add("flat", vec![Some(7.0), Some(7.0)], None).expect("add");

    let frame = chart.build_frame().expect("frame");
    let lines = marker_lines(&frame);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].y1, 50.0);
    assert_eq!(marker_texts(&frame)[0].text, "7");
}

#[test]
fn gridline_toggles_and_shadow() {
    let mut chart = chart();
    chart.add("a", vec![Some(0.0), Some(8.0)], None).expect("add");
    chart.set_marker_count(2).expect("marker count");

    let mut style = chart.config().style.clone();
    style.marker_shadow_color = Some(Color::rgba(0.0, 0.0, 0.0, 0.3));
    let config = chart.config().clone().with_style(style);
    chart.set_config(config).expect("config");

    let frame = chart.build_frame().expect("frame");
    let lines = marker_lines(&frame);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[1].y1, lines[0].y1 + 1.0);

    chart.set_hide_line_markers(true);
    let frame = chart.build_frame().expect("frame");
    assert!(marker_lines(&frame).is_empty());
    assert!(chart.set_marker_count(0).is_err());
}
