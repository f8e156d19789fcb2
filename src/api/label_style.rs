use serde::{Deserialize, Serialize};

use crate::render::{Color, DashPattern};

pub const DEFAULT_LABEL_FONT_FAMILY: &str = "monospace";
pub const DEFAULT_LABEL_FONT_SIZE_PX: f64 = 14.0;
pub const DEFAULT_LABEL_FONT_WEIGHT: u16 = 500;

/// Side of the chart occupied by the x-axis (value) label gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum XAxisLabelPosition {
    #[default]
    Left,
    Right,
}

/// Font and placement attributes shared by both label axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelFont {
    pub font_family: String,
    pub font_size_px: f64,
    pub font_weight: u16,
    pub color: Color,
    pub rotation_deg: f64,
    pub x_offset_px: f64,
    pub y_offset_px: f64,
}

impl Default for LabelFont {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_LABEL_FONT_FAMILY.to_owned(),
            font_size_px: DEFAULT_LABEL_FONT_SIZE_PX,
            font_weight: DEFAULT_LABEL_FONT_WEIGHT,
            color: Color::BLACK,
            rotation_deg: 0.0,
            x_offset_px: 0.0,
            y_offset_px: 0.0,
        }
    }
}

/// Style of the value-axis tick labels.
///
/// `width_px` overrides the reserved gutter width even when x-axis labels
/// are disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct XAxisLabelStyle {
    #[serde(flatten)]
    pub font: LabelFont,
    pub prefix: String,
    pub suffix: String,
    pub decimals: u8,
    pub position: XAxisLabelPosition,
    pub width_px: Option<f64>,
}

impl XAxisLabelStyle {
    #[must_use]
    pub fn with_font(mut self, font: LabelFont) -> Self {
        self.font = font;
        self
    }

    #[must_use]
    pub fn with_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: XAxisLabelPosition) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_width_px(mut self, width_px: f64) -> Self {
        self.width_px = Some(width_px);
        self
    }
}

/// Style of the category-axis labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct YAxisLabelStyle {
    #[serde(flatten)]
    pub font: LabelFont,
    pub height_px: Option<f64>,
}

impl YAxisLabelStyle {
    #[must_use]
    pub fn with_font(mut self, font: LabelFont) -> Self {
        self.font = font;
        self
    }

    #[must_use]
    pub fn with_height_px(mut self, height_px: f64) -> Self {
        self.height_px = Some(height_px);
        self
    }
}

/// Stroke of the dashed background gridlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundLineStyle {
    pub color: Color,
    pub stroke_width: f64,
    pub dash: DashPattern,
}

impl Default for BackgroundLineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            stroke_width: 1.0,
            dash: DashPattern::default(),
        }
    }
}
