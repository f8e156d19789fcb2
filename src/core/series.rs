use ordered_float::OrderedFloat;

use crate::error::{ChartError, ChartResult};

/// Extrema of a value series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesExtent {
    pub min: f64,
    pub max: f64,
}

impl SeriesExtent {
    /// Computes min/max of a non-empty, finite series.
    pub fn from_values(values: &[f64]) -> ChartResult<Self> {
        if values.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        if let Some(index) = values.iter().position(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "data value at index {index} must be finite"
            )));
        }

        let min = values
            .iter()
            .copied()
            .map(OrderedFloat)
            .min()
            .ok_or(ChartError::EmptySeries)?;
        let max = values
            .iter()
            .copied()
            .map(OrderedFloat)
            .max()
            .ok_or(ChartError::EmptySeries)?;

        Ok(Self {
            min: min.into_inner(),
            max: max.into_inner(),
        })
    }

    #[must_use]
    pub fn is_non_negative(self) -> bool {
        self.min >= 0.0 && self.max >= 0.0
    }

    #[must_use]
    pub fn straddles_zero(self) -> bool {
        self.min < 0.0 && self.max > 0.0
    }
}

/// Returns the category labels for a series.
///
/// Supplied labels must match the series length one-to-one. Missing labels
/// become the zero-based index of each data point.
pub fn normalize_category_labels(
    labels: Option<&[String]>,
    data_len: usize,
) -> ChartResult<Vec<String>> {
    match labels {
        Some(labels) if labels.len() != data_len => Err(ChartError::LabelCountMismatch {
            data: data_len,
            labels: labels.len(),
        }),
        Some(labels) => Ok(labels.to_vec()),
        None => Ok((0..data_len).map(|index| index.to_string()).collect()),
    }
}
