use tracing::trace;

use crate::render::{LinePrimitive, PrimitiveGroup, PrimitiveKey};

use super::{BackgroundLineStyle, ChartLayout};

fn background_line(
    key: PrimitiveKey,
    (x1, y1): (f64, f64),
    (x2, y2): (f64, f64),
    style: &BackgroundLineStyle,
) -> LinePrimitive {
    LinePrimitive {
        key,
        x1,
        y1,
        x2,
        y2,
        stroke_width: style.stroke_width,
        color: style.color.clone(),
        dash: style.dash.clone(),
    }
}

impl ChartLayout {
    /// Dashed x-axis (value) background lines, `x_axis_label_count + 1` of them.
    ///
    /// Each line runs from the left edge of the plotting area at the top to
    /// its right edge at the base height. The tick row is not part of the
    /// geometry, so all lines coincide; see [`ChartLayout::x_axis_tick_offsets`].
    #[must_use]
    pub fn render_x_axis_lines(&self) -> Vec<LinePrimitive> {
        let x1 = self.left_aligned_x_axis_label_width;
        let right_gutter = if self.left_aligned_x_axis_label_width != 0.0 {
            0.0
        } else {
            self.x_axis_label_width
        };
        let x2 = self.viewport.width - right_gutter;
        let base_height = self.base_height();

        let lines: Vec<LinePrimitive> = (0..=self.x_axis_label_count)
            .map(|index| {
                background_line(
                    PrimitiveKey::new(PrimitiveGroup::XAxisLine, index),
                    (x1, 0.0),
                    (x2, base_height),
                    &self.x_axis_background_line_style,
                )
            })
            .collect();

        trace!(count = lines.len(), "x-axis background lines");
        lines
    }

    /// Dashed y-axis (category) background lines, one per data point.
    ///
    /// Lines are vertical, centered in each category slot and span from the
    /// top of the chart down to the base height.
    #[must_use]
    pub fn render_y_axis_lines(&self) -> Vec<LinePrimitive> {
        let base_height = self.base_height();

        let lines: Vec<LinePrimitive> = (0..self.data.len())
            .map(|index| {
                let x = self.category_center_x(index);
                background_line(
                    PrimitiveKey::new(PrimitiveGroup::YAxisLine, index),
                    (x, 0.0),
                    (x, base_height),
                    &self.y_axis_background_line_style,
                )
            })
            .collect();

        trace!(count = lines.len(), "y-axis background lines");
        lines
    }

    /// Horizontal center of category slot `index`, after the left gutter.
    #[must_use]
    pub fn category_center_x(&self, index: usize) -> f64 {
        index as f64 * self.y_label_slot_width
            + self.y_label_slot_width / 2.0
            + self.left_aligned_x_axis_label_width
    }
}
