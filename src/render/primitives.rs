use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Stroke or fill color.
///
/// Hex strings (`#rgb`, `#rrggbb`, `#rrggbbaa`) parse into normalized RGBA
/// channels. Any other CSS color text (`black`, `rgba(0, 0, 0, .2)`,
/// `currentColor`) is kept verbatim and handed to the markup unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Rgba {
        red: f64,
        green: f64,
        blue: f64,
        alpha: f64,
    },
    Css(String),
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::Rgba {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Hex when prefixed with `#`, otherwise an opaque CSS color.
    pub fn parse(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }
        let color = Self::Css(trimmed.to_owned());
        color.validate()?;
        Ok(color)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().strip_prefix('#').ok_or_else(|| {
            ChartError::InvalidData(format!("color `{input}` must start with `#`"))
        })?;
        if !digits.is_ascii() {
            return Err(ChartError::InvalidData(format!(
                "color `{input}` must contain only hex digits"
            )));
        }

        let channel = |text: &str| {
            u8::from_str_radix(text, 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| {
                    ChartError::InvalidData(format!("color `{input}` must contain only hex digits"))
                })
        };

        match digits.len() {
            3 => {
                let mut expanded = [0.0; 3];
                for (slot, ch) in expanded.iter_mut().zip(digits.chars()) {
                    *slot = channel(&format!("{ch}{ch}"))?;
                }
                Ok(Self::rgb(expanded[0], expanded[1], expanded[2]))
            }
            6 | 8 => {
                let alpha = if digits.len() == 8 {
                    channel(&digits[6..8])?
                } else {
                    1.0
                };
                Ok(Self::rgba(
                    channel(&digits[0..2])?,
                    channel(&digits[2..4])?,
                    channel(&digits[4..6])?,
                    alpha,
                ))
            }
            _ => Err(ChartError::InvalidData(format!(
                "color `{input}` must have 3, 6 or 8 hex digits"
            ))),
        }
    }

    /// Attribute text: lowercase hex for RGBA, the original text otherwise.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Rgba {
                red,
                green,
                blue,
                alpha,
            } => {
                let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
                let rgb = format!(
                    "#{:02x}{:02x}{:02x}",
                    byte(*red),
                    byte(*green),
                    byte(*blue)
                );
                if *alpha >= 1.0 {
                    rgb
                } else {
                    format!("{rgb}{:02x}", byte(*alpha))
                }
            }
            Self::Css(text) => text.clone(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Rgba {
                red,
                green,
                blue,
                alpha,
            } => {
                for (channel, value) in [
                    ("red", *red),
                    ("green", *green),
                    ("blue", *blue),
                    ("alpha", *alpha),
                ] {
                    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                        return Err(ChartError::InvalidData(format!(
                            "color channel `{channel}` must be finite and in [0, 1]"
                        )));
                    }
                }
                Ok(())
            }
            Self::Css(text) if text.trim().is_empty() => Err(ChartError::InvalidData(
                "color must not be empty".to_owned(),
            )),
            Self::Css(_) => Ok(()),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> ChartResult<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

/// Stroke dash pattern in pixels, alternating dash and gap lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashPattern(pub SmallVec<[f64; 4]>);

impl DashPattern {
    #[must_use]
    pub fn solid() -> Self {
        Self(SmallVec::new())
    }

    #[must_use]
    pub fn new(segments: &[f64]) -> Self {
        Self(SmallVec::from_slice(segments))
    }

    #[must_use]
    pub fn is_solid(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn segments(&self) -> &[f64] {
        &self.0
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self
            .0
            .iter()
            .any(|segment| !segment.is_finite() || *segment < 0.0)
        {
            return Err(ChartError::InvalidData(
                "dash pattern segments must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for DashPattern {
    /// Gridline dash: 5px dash, 10px gap.
    fn default() -> Self {
        Self::new(&[5.0, 10.0])
    }
}

impl fmt::Display for DashPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Query that produced a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimitiveGroup {
    XAxisLine,
    YAxisLine,
    XAxisLabel,
    YAxisLabel,
}

impl PrimitiveGroup {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::XAxisLine => "x-axis-line",
            Self::YAxisLine => "y-axis-line",
            Self::XAxisLabel => "x-axis-label",
            Self::YAxisLabel => "y-axis-label",
        }
    }
}

/// Stable list key for a primitive: its query group plus emission index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimitiveKey {
    pub group: PrimitiveGroup,
    pub index: usize,
}

impl PrimitiveKey {
    #[must_use]
    pub const fn new(group: PrimitiveGroup, index: usize) -> Self {
        Self { group, index }
    }
}

impl fmt::Display for PrimitiveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.group.as_str(), self.index)
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub key: PrimitiveKey,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub dash: DashPattern,
}

impl LinePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(format!(
                "line `{}` coordinates must be finite",
                self.key
            )));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.dash.validate()?;
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

impl TextHAlign {
    /// SVG `text-anchor` value.
    #[must_use]
    pub fn text_anchor(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }
}

/// Draw command for one label in pixel space.
///
/// `rotation_deg` rotates the label around its own anchor `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub key: PrimitiveKey,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
    pub font_family: String,
    pub font_size_px: f64,
    pub font_weight: u16,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "text `{}` coordinates must be finite",
                self.key
            )));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
