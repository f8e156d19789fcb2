mod axis_label_format;
mod axis_labels;
mod chart_config;
mod gridlines;
mod label_style;
mod layout;
mod render_frame_builder;
mod validation;

pub use axis_label_format::{estimate_label_width_px, format_fixed, format_x_axis_label};
pub use chart_config::{ChartConfig, DEFAULT_X_AXIS_LABEL_COUNT};
pub use label_style::{
    BackgroundLineStyle, DEFAULT_LABEL_FONT_FAMILY, DEFAULT_LABEL_FONT_SIZE_PX,
    DEFAULT_LABEL_FONT_WEIGHT, LabelFont, XAxisLabelPosition, XAxisLabelStyle, YAxisLabelStyle,
};
pub use layout::{
    AxisVisibility, ChartLayout, DEFAULT_X_AXIS_LABEL_WIDTH_PX, DEFAULT_Y_AXIS_LABEL_HEIGHT_PX,
};
