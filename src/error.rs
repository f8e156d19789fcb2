use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Failures raised while building a layout from host configuration.
///
/// Layout queries never fail, so every variant comes from
/// [`crate::api::ChartLayout::new`] or from parsing a config/frame document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("empty series: at least one data value is required")]
    EmptySeries,

    #[error("invalid x-axis label count: must be >= 1")]
    InvalidTickCount,

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("label count mismatch: {data} data values but {labels} labels")]
    LabelCountMismatch { data: usize, labels: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
