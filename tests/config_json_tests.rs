use linechart_rs::api::{DEFAULT_MARKER_COUNT, LineChart, LineChartConfig};
use linechart_rs::core::{DEFAULT_SERIES_PALETTE, PlotArea, Viewport};
use linechart_rs::render::{Color, DotShape, NullRenderer};
use linechart_rs::ChartError;

#[test]
fn config_json_round_trip_preserves_everything() {
    let config = LineChartConfig::for_viewport(Viewport::new(800, 600))
        .expect("config")
        .with_title("Revenue")
        .with_axis_labels(Some("Quarter".to_owned()), None)
        .with_labels([(0, "Q1".to_owned()), (3, "Q4".to_owned())])
        .with_y_bounds(Some(0.0), None)
        .with_dot_style(DotShape::Square)
        .with_marker_count(6);

    let json = config.to_json_pretty().expect("serialize");
    let restored = LineChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn minimal_json_fills_defaults() {
    let json = r#"{
        "viewport": { "width": 640, "height": 480 },
        "plot": { "left": 70.0, "top": 80.0, "width": 520.0, "height": 340.0 }
    }"#;
    let config = LineChartConfig::from_json_str(json).expect("parse");
    assert_eq!(config.marker_count, DEFAULT_MARKER_COUNT);
    assert_eq!(config.style.palette, DEFAULT_SERIES_PALETTE.to_vec());
    assert_eq!(config.style.no_data_message, "No Data");
    assert!(config.labels.is_empty());
    assert!(!config.toggles.hide_legend);
}

#[test]
fn for_viewport_applies_default_margins() {
    let config = LineChartConfig::for_viewport(Viewport::new(800, 600)).expect("config");
    assert_eq!(config.plot, PlotArea::new(70.0, 80.0, 680.0, 460.0));
    assert!(LineChartConfig::for_viewport(Viewport::new(100, 100)).is_err());
}

#[test]
fn malformed_json_is_invalid_input() {
    let err = LineChartConfig::from_json_str("{ not json").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[test]
fn invalid_configs_are_rejected() {
    let base = LineChartConfig::new(Viewport::new(100, 100), PlotArea::new(0.0, 0.0, 100.0, 100.0));

    let zero_markers = base.clone().with_marker_count(0);
    assert!(LineChart::new(NullRenderer::default(), zero_markers).is_err());

    let outside = LineChartConfig::new(Viewport::new(100, 100), PlotArea::new(10.0, 0.0, 100.0, 100.0));
    assert!(LineChart::new(NullRenderer::default(), outside).is_err());

    let inverted = base.clone().with_y_bounds(Some(10.0), Some(1.0));
    assert!(LineChart::new(NullRenderer::default(), inverted).is_err());

    let empty_viewport = LineChartConfig::new(Viewport::new(0, 100), PlotArea::new(0.0, 0.0, 1.0, 1.0));
    assert!(matches!(
        LineChart::new(NullRenderer::default(), empty_viewport),
        Err(ChartError::InvalidViewport { width: 0, height: 100 })
    ));
}

#[test]
fn rejected_set_config_keeps_previous_config() {
    let base = LineChartConfig::new(Viewport::new(100, 100), PlotArea::new(0.0, 0.0, 100.0, 100.0))
        .with_title("kept");
    let mut chart = LineChart::new(NullRenderer::default(), base.clone()).expect("chart init");

    assert!(chart.set_config(base.clone().with_marker_count(0)).is_err());
    assert_eq!(chart.config(), &base);
}

#[test]
fn new_palette_applies_to_later_series() {
    let base = LineChartConfig::new(Viewport::new(100, 100), PlotArea::new(0.0, 0.0, 100.0, 100.0));
    let mut chart = LineChart::new(NullRenderer::default(), base.clone()).expect("chart init");
    chart.add("before", vec![Some(1.0)], None).expect("add");

    let teal = Color::from_rgb8(0, 128, 128);
    let mut style = base.style.clone();
    style.palette = vec![teal];
    chart.set_config(base.with_style(style)).expect("config");
    chart.add("after", vec![Some(2.0)], None).expect("add");

    assert_eq!(chart.series().get("before").expect("before").color, DEFAULT_SERIES_PALETTE[0]);
    assert_eq!(chart.series().get("after").expect("after").color, teal);
}
