use tracing::trace;

use crate::render::{PrimitiveGroup, PrimitiveKey, TextHAlign, TextPrimitive};

use super::axis_label_format::{estimate_label_width_px, format_x_axis_label};
use super::{ChartLayout, LabelFont, XAxisLabelPosition};

fn label_text(key: PrimitiveKey, text: String, x: f64, y: f64, font: &LabelFont) -> TextPrimitive {
    TextPrimitive {
        key,
        text,
        x,
        y,
        rotation_deg: font.rotation_deg,
        font_family: font.font_family.clone(),
        font_size_px: font.font_size_px,
        font_weight: font.font_weight,
        color: font.color.clone(),
        h_align: TextHAlign::Center,
    }
}

impl ChartLayout {
    /// Value shown by x-axis tick `index`.
    ///
    /// See [`crate::core::ValueScale::tick_value`].
    #[must_use]
    pub fn x_axis_tick_value(&self, index: usize) -> f64 {
        self.scale.tick_value(index, self.x_axis_label_count)
    }

    /// X-axis (value) labels, `x_axis_label_count + 1` of them.
    ///
    /// Labels sit in the value gutter, shifted right by half their estimated
    /// width so the centered text starts at the gutter edge. Rows follow
    /// `y_distance_between_x_labels`, one row above the tick index.
    #[must_use]
    pub fn render_x_axis_labels(&self) -> Vec<TextPrimitive> {
        let style = &self.x_axis_label_style;
        let font = &style.font;
        let gutter_x = match self.x_axis_label_position {
            XAxisLabelPosition::Left => 0.0,
            XAxisLabelPosition::Right => self.viewport.width - self.x_axis_label_width,
        };
        let row = self.y_distance_between_x_labels;

        let labels: Vec<TextPrimitive> = (0..=self.x_axis_label_count)
            .map(|index| {
                let text = format_x_axis_label(
                    self.x_axis_tick_value(index),
                    style.decimals,
                    &style.prefix,
                    &style.suffix,
                );
                let x = gutter_x
                    + font.x_offset_px
                    + estimate_label_width_px(&text, font.font_size_px);
                let y = row * index as f64 - row + font.font_size_px + font.y_offset_px;
                label_text(
                    PrimitiveKey::new(PrimitiveGroup::XAxisLabel, index),
                    text,
                    x,
                    y,
                    font,
                )
            })
            .collect();

        trace!(count = labels.len(), "x-axis labels");
        labels
    }

    /// Y-axis (category) labels, one per data point, just above the base line.
    #[must_use]
    pub fn render_y_axis_labels(&self) -> Vec<TextPrimitive> {
        let font = &self.y_axis_label_style.font;
        let y = self.base_height() - font.font_size_px + font.y_offset_px;

        let labels: Vec<TextPrimitive> = self
            .labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let x = self.category_center_x(index) + font.x_offset_px;
                label_text(
                    PrimitiveKey::new(PrimitiveGroup::YAxisLabel, index),
                    label.clone(),
                    x,
                    y,
                    font,
                )
            })
            .collect();

        trace!(count = labels.len(), "y-axis labels");
        labels
    }
}
