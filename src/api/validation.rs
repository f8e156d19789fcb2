use crate::core::{ValueScale, Viewport};
use crate::error::{ChartError, ChartResult};

use super::{BackgroundLineStyle, ChartConfig, LabelFont, XAxisLabelStyle, YAxisLabelStyle};

pub(super) const MAX_LABEL_DECIMALS: u8 = 12;

/// Checks everything in a config that does not depend on the series itself.
///
/// Series checks (emptiness, finiteness, label count) happen while the
/// extent and labels are resolved.
pub(super) fn validate_chart_config(config: &ChartConfig) -> ChartResult<()> {
    config.viewport.validate()?;
    if config.x_axis_label_count == 0 {
        return Err(ChartError::InvalidTickCount);
    }
    validate_x_axis_label_style(&config.x_axis_label_style)?;
    validate_y_axis_label_style(&config.y_axis_label_style)?;
    validate_background_line_style("x-axis", &config.x_axis_background_line_style)?;
    validate_background_line_style("y-axis", &config.y_axis_background_line_style)?;
    Ok(())
}

pub(super) fn validate_x_axis_label_style(style: &XAxisLabelStyle) -> ChartResult<()> {
    validate_label_font("x-axis", &style.font)?;
    if style.decimals > MAX_LABEL_DECIMALS {
        return Err(ChartError::InvalidData(format!(
            "x-axis label decimals must be <= {MAX_LABEL_DECIMALS}"
        )));
    }
    if let Some(width) = style.width_px {
        validate_gutter_size("x-axis label width", width)?;
    }
    Ok(())
}

pub(super) fn validate_y_axis_label_style(style: &YAxisLabelStyle) -> ChartResult<()> {
    validate_label_font("y-axis", &style.font)?;
    if let Some(height) = style.height_px {
        validate_gutter_size("y-axis label height", height)?;
    }
    Ok(())
}

fn validate_label_font(axis: &str, font: &LabelFont) -> ChartResult<()> {
    if font.font_family.trim().is_empty() {
        return Err(ChartError::InvalidData(format!(
            "{axis} label font family must not be empty"
        )));
    }
    if !font.font_size_px.is_finite() || font.font_size_px <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{axis} label font size must be finite and > 0"
        )));
    }
    for (name, value) in [
        ("rotation", font.rotation_deg),
        ("x offset", font.x_offset_px),
        ("y offset", font.y_offset_px),
    ] {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "{axis} label {name} must be finite"
            )));
        }
    }
    font.color.validate()
}

fn validate_background_line_style(axis: &str, style: &BackgroundLineStyle) -> ChartResult<()> {
    if !style.stroke_width.is_finite() || style.stroke_width <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{axis} background line stroke width must be finite and > 0"
        )));
    }
    style.dash.validate()?;
    style.color.validate()
}

fn validate_gutter_size(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

/// Resolved gutters must leave a non-negative plotting area.
pub(super) fn validate_gutters_fit(
    viewport: Viewport,
    x_axis_label_width: f64,
    y_axis_label_height: f64,
) -> ChartResult<()> {
    if x_axis_label_width > viewport.width {
        return Err(ChartError::InvalidData(format!(
            "x-axis label width {x_axis_label_width} exceeds chart width {}",
            viewport.width
        )));
    }
    if y_axis_label_height > viewport.height {
        return Err(ChartError::InvalidData(format!(
            "y-axis label height {y_axis_label_height} exceeds chart height {}",
            viewport.height
        )));
    }
    Ok(())
}

/// The resolved scale must map every value and tick to finite numbers.
///
/// Finite data can still overflow here: a range wider than `f64::MAX` gives
/// an infinite span, and the top tick sits `count + 1` steps above the origin.
pub(super) fn validate_value_scale(
    scale: ValueScale,
    x_axis_label_count: usize,
) -> ChartResult<()> {
    if !scale.value_span().is_finite() {
        return Err(ChartError::InvalidData(
            "series value range must be finite".to_owned(),
        ));
    }
    if !scale.base_height().is_finite() {
        return Err(ChartError::InvalidData(
            "series base height must be finite".to_owned(),
        ));
    }
    for index in [0, x_axis_label_count] {
        if !scale.tick_value(index, x_axis_label_count).is_finite() {
            return Err(ChartError::InvalidData(format!(
                "x-axis tick {index} value must be finite"
            )));
        }
    }
    Ok(())
}
