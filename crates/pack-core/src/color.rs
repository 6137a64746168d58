//! Colors and CSS color parsing.

use std::fmt;

use crate::errors::ColorError;

/// An sRGB color with 8-bit channels and a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity, 0.0 (transparent) to 1.0 (opaque)
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse any CSS color notation.
    ///
    /// Accepts hex forms (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`),
    /// `rgb()`/`rgba()`, `hsl()`/`hsla()` and CSS named colors.
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let parsed: csscolorparser::Color = value.parse().map_err(|_| ColorError::Unknown {
            value: value.to_string(),
        })?;
        let [r, g, b, _] = parsed.to_rgba8();
        Ok(Self::rgba(r, g, b, parsed.a as f32))
    }

    /// True if alpha is below fully opaque.
    pub fn is_translucent(&self) -> bool {
        self.a < 1.0
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_translucent() {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        } else {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        }
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A background fill: either transparent or a solid color.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BackgroundColor {
    Transparent,
    Color(Color),
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundColor::Transparent => f.write_str("transparent"),
            BackgroundColor::Color(color) => color.fmt(f),
        }
    }
}

impl From<Color> for BackgroundColor {
    fn from(color: Color) -> Self {
        BackgroundColor::Color(color)
    }
}
