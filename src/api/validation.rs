use crate::error::{ChartError, ChartResult};

use super::{ChartStyle, LineChartConfig, SeriesStyle};

pub(super) fn validate_config(config: &LineChartConfig) -> ChartResult<()> {
    if !config.viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }

    let plot = config.plot.validate()?;
    if plot.left < 0.0
        || plot.top < 0.0
        || plot.right() > f64::from(config.viewport.width)
        || plot.bottom() > f64::from(config.viewport.height)
    {
        return Err(ChartError::InvalidInput(
            "plot area must lie inside the viewport".to_owned(),
        ));
    }

    validate_chart_style(&config.style)?;
    validate_series_style(config.series_style)?;
    config.y_bounds.validate("y")?;
    config.x_bounds.validate("x")?;

    if config.marker_count == 0 {
        return Err(ChartError::InvalidInput(
            "marker_count must be >= 1".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_chart_style(style: &ChartStyle) -> ChartResult<()> {
    for (value, name) in [
        (style.title_font_size_px, "title_font_size_px"),
        (style.legend_font_size_px, "legend_font_size_px"),
        (style.marker_font_size_px, "marker_font_size_px"),
        (style.marker_line_width, "marker_line_width"),
        (style.reference_line_width, "reference_line_width"),
        (style.legend_box_size_px, "legend_box_size_px"),
        (style.char_width_ratio, "char_width_ratio"),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidInput(format!(
                "chart style `{name}` must be finite and > 0"
            )));
        }
    }
    for (value, name) in [
        (style.label_margin_px, "label_margin_px"),
        (style.title_margin_px, "title_margin_px"),
        (style.legend_spacing_px, "legend_spacing_px"),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidInput(format!(
                "chart style `{name}` must be finite and >= 0"
            )));
        }
    }
    if style.font_family.trim().is_empty() {
        return Err(ChartError::InvalidInput(
            "chart style font_family must not be empty".to_owned(),
        ));
    }

    style.font_color.validate()?;
    style.marker_color.validate()?;
    style.reference_line_color.validate()?;
    if let Some(shadow) = style.marker_shadow_color {
        shadow.validate()?;
    }
    for color in &style.palette {
        color.validate()?;
    }
    Ok(())
}

pub(super) fn validate_series_style(style: SeriesStyle) -> ChartResult<SeriesStyle> {
    for (value, name) in [
        (style.line_width, "line_width"),
        (style.dot_radius, "dot_radius"),
    ] {
        if let Some(value) = value {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidInput(format!(
                    "series `{name}` override must be finite and > 0"
                )));
            }
        }
    }
    Ok(style)
}
