mod frame;
mod null_renderer;
mod primitives;
mod svg;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, DashPattern, LinePrimitive, PrimitiveGroup, PrimitiveKey, TextHAlign, TextPrimitive,
};
pub use svg::{SvgRenderer, escape_xml, format_px, frame_to_svg_fragment, line_to_svg, text_to_svg};

use crate::error::ChartResult;

/// Contract implemented by any output backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// output code stays isolated from layout math.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
