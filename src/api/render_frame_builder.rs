use tracing::debug;

use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::ChartLayout;

impl ChartLayout {
    /// Assembles every enabled query into one frame.
    ///
    /// Background lines come first so labels draw on top. Each group is
    /// gated by its `has_*` configuration flag.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let visibility = self.visibility;
        let mut frame = RenderFrame::new(self.viewport);

        if visibility.x_axis_background_lines {
            frame = frame.with_lines(self.render_x_axis_lines());
        }
        if visibility.y_axis_background_lines {
            frame = frame.with_lines(self.render_y_axis_lines());
        }
        if visibility.x_axis_labels {
            frame = frame.with_texts(self.render_x_axis_labels());
        }
        if visibility.y_axis_labels {
            frame = frame.with_texts(self.render_y_axis_labels());
        }

        debug!(
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "render frame built"
        );
        frame
    }

    /// Builds the frame and hands it to `renderer`.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.build_render_frame();
        renderer.render(&frame)
    }
}
