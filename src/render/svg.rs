//! SVG markup formatting for render frames.
//!
//! This is the only place that knows markup syntax. The layout engine emits
//! primitive records; hosts that embed markup fragments into their own
//! drawing surface call [`line_to_svg`]/[`text_to_svg`] or use
//! [`SvgRenderer`] for a whole frame.

use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::render::{LinePrimitive, RenderFrame, Renderer, TextPrimitive};

/// Formats a pixel value with at most three decimals and no trailing zeros.
#[must_use]
pub fn format_px(value: f64) -> String {
    let rounded = (value * 1_000.0).round() / 1_000.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded}")
}

#[must_use]
pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[must_use]
pub fn line_to_svg(line: &LinePrimitive) -> String {
    let mut markup = format!(
        "<line data-key=\"{}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
        line.key,
        format_px(line.x1),
        format_px(line.y1),
        format_px(line.x2),
        format_px(line.y2),
        escape_xml(&line.color.to_css()),
        format_px(line.stroke_width),
    );
    if !line.dash.is_solid() {
        let _ = write!(markup, " stroke-dasharray=\"{}\"", line.dash);
    }
    markup.push_str("/>");
    markup
}

#[must_use]
pub fn text_to_svg(text: &TextPrimitive) -> String {
    let x = format_px(text.x);
    let y = format_px(text.y);
    let mut markup = format!("<text data-key=\"{}\" x=\"{x}\" y=\"{y}\"", text.key);
    if text.rotation_deg != 0.0 {
        let _ = write!(
            markup,
            " transform=\"rotate({}, {x}, {y})\"",
            format_px(text.rotation_deg)
        );
    }
    let _ = write!(
        markup,
        " text-anchor=\"{}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\" fill=\"{}\">{}</text>",
        text.h_align.text_anchor(),
        escape_xml(&text.font_family),
        format_px(text.font_size_px),
        text.font_weight,
        escape_xml(&text.color.to_css()),
        escape_xml(&text.text),
    );
    markup
}

/// Markup for every primitive in a frame, lines first, one element per line.
#[must_use]
pub fn frame_to_svg_fragment(frame: &RenderFrame) -> String {
    let mut markup = String::new();
    for line in &frame.lines {
        markup.push_str(&line_to_svg(line));
        markup.push('\n');
    }
    for text in &frame.texts {
        markup.push_str(&text_to_svg(text));
        markup.push('\n');
    }
    markup
}

/// Renderer that serializes frames to SVG markup.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    standalone: bool,
    output: String,
}

impl SvgRenderer {
    /// Emits bare fragments for embedding into a host-owned `<svg>` node.
    #[must_use]
    pub fn fragment() -> Self {
        Self::default()
    }

    /// Wraps each frame in a complete `<svg>` document sized to the viewport.
    #[must_use]
    pub fn standalone() -> Self {
        Self {
            standalone: true,
            output: String::new(),
        }
    }

    /// Markup of the most recently rendered frame.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let body = frame_to_svg_fragment(frame);
        self.output = if self.standalone {
            let width = format_px(frame.viewport.width);
            let height = format_px(frame.viewport.height);
            format!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n{body}</svg>\n"
            )
        } else {
            body
        };
        Ok(())
    }
}
