#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::core::{SeriesExtent, ValueScale, Viewport, normalize_category_labels};
use crate::error::ChartResult;

use super::validation::{validate_chart_config, validate_gutters_fit, validate_value_scale};
use super::{
    BackgroundLineStyle, ChartConfig, XAxisLabelPosition, XAxisLabelStyle, YAxisLabelStyle,
};

/// Gutter width reserved for x-axis (value) labels when enabled.
pub const DEFAULT_X_AXIS_LABEL_WIDTH_PX: f64 = 50.0;
/// Gutter height reserved for y-axis (category) labels when enabled.
pub const DEFAULT_Y_AXIS_LABEL_HEIGHT_PX: f64 = 50.0;

/// Which primitive groups the frame builder emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisVisibility {
    pub x_axis_labels: bool,
    pub y_axis_labels: bool,
    pub x_axis_background_lines: bool,
    pub y_axis_background_lines: bool,
}

/// Layout engine for one chart render pass.
///
/// All scale and position constants are derived once in [`ChartLayout::new`]
/// and never change afterwards. The render queries are pure reads of that
/// state, so a layout can be queried in any order and shared between readers.
/// Hosts build a fresh layout whenever their configuration changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub(super) data: Vec<f64>,
    pub(super) labels: Vec<String>,
    pub(super) viewport: Viewport,
    pub(super) scale: ValueScale,
    pub(super) x_axis_label_count: usize,
    pub(super) x_axis_label_width: f64,
    pub(super) y_axis_label_height: f64,
    pub(super) x_axis_label_position: XAxisLabelPosition,
    pub(super) left_aligned_x_axis_label_width: f64,
    pub(super) y_distance_between_x_labels: f64,
    pub(super) y_label_slot_width: f64,
    pub(super) x_axis_label_style: XAxisLabelStyle,
    pub(super) y_axis_label_style: YAxisLabelStyle,
    pub(super) x_axis_background_line_style: BackgroundLineStyle,
    pub(super) y_axis_background_line_style: BackgroundLineStyle,
    pub(super) visibility: AxisVisibility,
}

impl ChartLayout {
    /// Validates `config` and derives the layout state.
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        validate_chart_config(&config)?;

        let ChartConfig {
            data,
            labels,
            viewport,
            start_at_zero,
            has_x_axis_labels,
            has_y_axis_labels,
            x_axis_label_count,
            x_axis_label_style,
            y_axis_label_style,
            has_x_axis_background_lines,
            has_y_axis_background_lines,
            x_axis_background_line_style,
            y_axis_background_line_style,
        } = config;

        let labels = normalize_category_labels(labels.as_deref(), data.len())?;
        let extent = SeriesExtent::from_values(&data)?;

        let default_width = if has_x_axis_labels {
            DEFAULT_X_AXIS_LABEL_WIDTH_PX
        } else {
            0.0
        };
        let x_axis_label_width = x_axis_label_style.width_px.unwrap_or(default_width);

        let default_height = if has_y_axis_labels {
            DEFAULT_Y_AXIS_LABEL_HEIGHT_PX
        } else {
            0.0
        };
        let y_axis_label_height = y_axis_label_style.height_px.unwrap_or(default_height);

        validate_gutters_fit(viewport, x_axis_label_width, y_axis_label_height)?;

        let x_axis_label_position = x_axis_label_style.position;
        let left_aligned_x_axis_label_width = match x_axis_label_position {
            XAxisLabelPosition::Left => x_axis_label_width,
            XAxisLabelPosition::Right => 0.0,
        };

        let plot_height = viewport.height - y_axis_label_height;
        let y_distance_between_x_labels = plot_height / x_axis_label_count as f64;
        let y_label_slot_width = (viewport.width - x_axis_label_width) / data.len() as f64;

        let scale = ValueScale::new(extent, start_at_zero, viewport.height, plot_height);
        validate_value_scale(scale, x_axis_label_count)?;
        if scale.is_degenerate() {
            warn!(
                min = extent.min,
                max = extent.max,
                start_at_zero,
                "degenerate series, value span floored to 1"
            );
        }

        debug!(
            points = data.len(),
            min = extent.min,
            max = extent.max,
            value_span = scale.value_span(),
            base_height = scale.base_height(),
            x_axis_label_width,
            y_axis_label_height,
            y_distance_between_x_labels,
            y_label_slot_width,
            "chart layout resolved"
        );

        Ok(Self {
            data,
            labels,
            viewport,
            scale,
            x_axis_label_count,
            x_axis_label_width,
            y_axis_label_height,
            x_axis_label_position,
            left_aligned_x_axis_label_width,
            y_distance_between_x_labels,
            y_label_slot_width,
            x_axis_label_style,
            y_axis_label_style,
            x_axis_background_line_style,
            y_axis_background_line_style,
            visibility: AxisVisibility {
                x_axis_labels: has_x_axis_labels,
                y_axis_labels: has_y_axis_labels,
                x_axis_background_lines: has_x_axis_background_lines,
                y_axis_background_lines: has_y_axis_background_lines,
            },
        })
    }

    /// Maps one data value to a pixel height.
    ///
    /// See [`ValueScale::value_to_height`] for the three scaling regimes.
    #[must_use]
    pub fn calc_data_point_height(&self, value: f64) -> f64 {
        let height = self.scale.value_to_height(value);
        if self.scale.start_at_zero() && self.scale.extent().max == 0.0 {
            warn!(value, "zero series maximum with zero origin, height clamped to 0");
        }
        height
    }

    /// Heights of every data point, in series order.
    #[must_use]
    pub fn data_point_heights(&self) -> Vec<f64> {
        let scale = self.scale;

        #[cfg(feature = "parallel-projection")]
        {
            self.data
                .par_iter()
                .map(|value| scale.value_to_height(*value))
                .collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            self.data
                .iter()
                .map(|value| scale.value_to_height(*value))
                .collect()
        }
    }

    /// Row offset of every value-axis tick, top to bottom.
    ///
    /// The horizontal gridline query does not use these rows; hosts that
    /// want per-tick rows read them here.
    #[must_use]
    pub fn x_axis_tick_offsets(&self) -> Vec<f64> {
        (0..=self.x_axis_label_count)
            .map(|index| self.y_distance_between_x_labels * index as f64)
            .collect()
    }

    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn value_scale(&self) -> ValueScale {
        self.scale
    }

    #[must_use]
    pub fn start_at_zero(&self) -> bool {
        self.scale.start_at_zero()
    }

    #[must_use]
    pub fn min_val(&self) -> f64 {
        self.scale.extent().min
    }

    #[must_use]
    pub fn max_val(&self) -> f64 {
        self.scale.extent().max
    }

    #[must_use]
    pub fn value_span(&self) -> f64 {
        self.scale.value_span()
    }

    #[must_use]
    pub fn base_height(&self) -> f64 {
        self.scale.base_height()
    }

    #[must_use]
    pub fn x_axis_label_count(&self) -> usize {
        self.x_axis_label_count
    }

    #[must_use]
    pub fn x_axis_label_width(&self) -> f64 {
        self.x_axis_label_width
    }

    #[must_use]
    pub fn y_axis_label_height(&self) -> f64 {
        self.y_axis_label_height
    }

    #[must_use]
    pub fn x_axis_label_position(&self) -> XAxisLabelPosition {
        self.x_axis_label_position
    }

    #[must_use]
    pub fn left_aligned_x_axis_label_width(&self) -> f64 {
        self.left_aligned_x_axis_label_width
    }

    #[must_use]
    pub fn y_distance_between_x_labels(&self) -> f64 {
        self.y_distance_between_x_labels
    }

    #[must_use]
    pub fn y_label_slot_width(&self) -> f64 {
        self.y_label_slot_width
    }

    #[must_use]
    pub fn visibility(&self) -> AxisVisibility {
        self.visibility
    }
}
