use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::{BackgroundLineStyle, XAxisLabelStyle, YAxisLabelStyle};

pub const DEFAULT_X_AXIS_LABEL_COUNT: usize = 4;

/// Host configuration for one chart layout pass.
///
/// This type is serializable so hosts can hand over chart props as JSON.
/// Only `data` and `viewport` are required; every other field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub data: Vec<f64>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    pub viewport: Viewport,
    #[serde(default = "default_true")]
    pub start_at_zero: bool,
    #[serde(default = "default_true")]
    pub has_x_axis_labels: bool,
    #[serde(default = "default_true")]
    pub has_y_axis_labels: bool,
    #[serde(default = "default_x_axis_label_count")]
    pub x_axis_label_count: usize,
    #[serde(default)]
    pub x_axis_label_style: XAxisLabelStyle,
    #[serde(default)]
    pub y_axis_label_style: YAxisLabelStyle,
    #[serde(default = "default_true")]
    pub has_x_axis_background_lines: bool,
    #[serde(default = "default_true")]
    pub has_y_axis_background_lines: bool,
    #[serde(default)]
    pub x_axis_background_line_style: BackgroundLineStyle,
    #[serde(default)]
    pub y_axis_background_line_style: BackgroundLineStyle,
}

impl ChartConfig {
    /// Creates a config with default styles and generated category labels.
    #[must_use]
    pub fn new(data: Vec<f64>, viewport: Viewport) -> Self {
        Self {
            data,
            labels: None,
            viewport,
            start_at_zero: true,
            has_x_axis_labels: true,
            has_y_axis_labels: true,
            x_axis_label_count: DEFAULT_X_AXIS_LABEL_COUNT,
            x_axis_label_style: XAxisLabelStyle::default(),
            y_axis_label_style: YAxisLabelStyle::default(),
            has_x_axis_background_lines: true,
            has_y_axis_background_lines: true,
            x_axis_background_line_style: BackgroundLineStyle::default(),
            y_axis_background_line_style: BackgroundLineStyle::default(),
        }
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_start_at_zero(mut self, start_at_zero: bool) -> Self {
        self.start_at_zero = start_at_zero;
        self
    }

    /// Toggles the x-axis (value) and y-axis (category) label gutters.
    #[must_use]
    pub fn with_axis_labels(mut self, has_x_axis_labels: bool, has_y_axis_labels: bool) -> Self {
        self.has_x_axis_labels = has_x_axis_labels;
        self.has_y_axis_labels = has_y_axis_labels;
        self
    }

    #[must_use]
    pub fn with_x_axis_label_count(mut self, count: usize) -> Self {
        self.x_axis_label_count = count;
        self
    }

    #[must_use]
    pub fn with_x_axis_label_style(mut self, style: XAxisLabelStyle) -> Self {
        self.x_axis_label_style = style;
        self
    }

    #[must_use]
    pub fn with_y_axis_label_style(mut self, style: YAxisLabelStyle) -> Self {
        self.y_axis_label_style = style;
        self
    }

    #[must_use]
    pub fn with_background_lines(mut self, has_x_axis_lines: bool, has_y_axis_lines: bool) -> Self {
        self.has_x_axis_background_lines = has_x_axis_lines;
        self.has_y_axis_background_lines = has_y_axis_lines;
        self
    }

    #[must_use]
    pub fn with_x_axis_background_line_style(mut self, style: BackgroundLineStyle) -> Self {
        self.x_axis_background_line_style = style;
        self
    }

    #[must_use]
    pub fn with_y_axis_background_line_style(mut self, style: BackgroundLineStyle) -> Self {
        self.y_axis_background_line_style = style;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config json: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config json: {e}"))
        })
    }
}

fn default_true() -> bool {
    true
}

fn default_x_axis_label_count() -> usize {
    DEFAULT_X_AXIS_LABEL_COUNT
}
