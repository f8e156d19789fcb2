use crate::core::SeriesExtent;

/// Value-to-pixel mapping for the value axis.
///
/// The scale is resolved once from the series extent and the drawable
/// height. Heights are measured in pixels; the sign convention depends on the
/// regime (see [`ValueScale::value_to_height`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    extent: SeriesExtent,
    start_at_zero: bool,
    value_span: f64,
    span_floored: bool,
    height: f64,
    plot_height: f64,
    base_height: f64,
}

impl ValueScale {
    /// Resolves span and base height.
    ///
    /// `plot_height` is the chart height minus the category-label gutter.
    #[must_use]
    pub fn new(extent: SeriesExtent, start_at_zero: bool, height: f64, plot_height: f64) -> Self {
        let raw_span = if start_at_zero {
            extent.max
        } else {
            extent.max - extent.min
        };
        let span_floored = raw_span == 0.0;
        let value_span = if span_floored { 1.0 } else { raw_span };

        let base_height = if extent.is_non_negative() {
            height
        } else if extent.straddles_zero() {
            height * extent.max / value_span
        } else {
            0.0
        };

        Self {
            extent,
            start_at_zero,
            value_span,
            span_floored,
            height,
            plot_height,
            base_height,
        }
    }

    #[must_use]
    pub fn extent(self) -> SeriesExtent {
        self.extent
    }

    #[must_use]
    pub fn start_at_zero(self) -> bool {
        self.start_at_zero
    }

    /// Denominator used for every value-to-pixel mapping. Never zero.
    #[must_use]
    pub fn value_span(self) -> f64 {
        self.value_span
    }

    /// True when a constant or all-zero series forced the span to 1.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span_floored
    }

    /// Pixel row of the zero reference line.
    #[must_use]
    pub fn base_height(self) -> f64 {
        self.base_height
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.plot_height
    }

    /// Value shown at the axis origin: zero or the series minimum.
    #[must_use]
    pub fn origin_value(self) -> f64 {
        if self.start_at_zero {
            0.0
        } else {
            self.extent.min
        }
    }

    /// Value of value-axis tick `index` out of `count` divisions.
    ///
    /// Ticks count down by `value_span / count`: tick 0 carries `count + 1`
    /// steps above the origin, tick `count` carries one step.
    #[must_use]
    pub fn tick_value(self, index: usize, count: usize) -> f64 {
        let count = count as f64;
        let step = self.value_span / count;
        step * (index as f64 - count - 1.0).abs() + self.origin_value()
    }

    /// Maps one data value to a pixel height.
    ///
    /// Regimes, in priority order:
    /// 1. `start_at_zero`: linear from 0 at value 0 to `plot_height` at the
    ///    series maximum. A zero maximum maps every value to 0.
    /// 2. non-negative series: linear from 0 at the series minimum to
    ///    `plot_height` at the maximum.
    /// 3. otherwise: signed offset from the series maximum over the full
    ///    chart height, to be combined with the base height by the caller.
    #[must_use]
    pub fn value_to_height(self, value: f64) -> f64 {
        if self.start_at_zero {
            if self.extent.max == 0.0 {
                return 0.0;
            }
            return self.plot_height * (value / self.extent.max);
        }

        if self.extent.is_non_negative() {
            return self.plot_height * ((value - self.extent.min) / self.value_span);
        }

        self.height * ((value - self.extent.max) / self.value_span)
    }
}
