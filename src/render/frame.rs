use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_lines(mut self, lines: impl IntoIterator<Item = LinePrimitive>) -> Self {
        self.lines.extend(lines);
        self
    }

    #[must_use]
    pub fn with_texts(mut self, texts: impl IntoIterator<Item = TextPrimitive>) -> Self {
        self.texts.extend(texts);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;

        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.texts.is_empty()
    }

    /// Pretty JSON snapshot of the frame, for host debugging and fixtures.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize render frame: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse render frame json: {e}")))
    }
}
