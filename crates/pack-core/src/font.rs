//! Font descriptions handed to applicators.

use std::fmt;

use crate::types::{FontStyle, FontVariant, FontWeight};

/// Font size meaning "whatever the platform uses by default".
pub const SYSTEM_DEFAULT_FONT_SIZE: i32 = -1;

pub const SYSTEM: &str = "system";
pub const SERIF: &str = "serif";
pub const SANS_SERIF: &str = "sans-serif";
pub const CURSIVE: &str = "cursive";
pub const FANTASY: &str = "fantasy";
pub const MONOSPACE: &str = "monospace";

/// Generic font family keywords.
pub const GENERIC_FAMILIES: &[&str] = &[SYSTEM, SERIF, SANS_SERIF, CURSIVE, FANTASY, MONOSPACE];

/// A resolved font: one or more families in fallback order plus face details.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    pub family: Vec<String>,
    /// Size in points, or [`SYSTEM_DEFAULT_FONT_SIZE`]
    pub size: i32,
    pub style: FontStyle,
    pub variant: FontVariant,
    pub weight: FontWeight,
}

impl Font {
    /// Create a normal-face font.
    pub fn new(family: impl Into<String>, size: i32) -> Self {
        Self {
            family: vec![family.into()],
            size,
            style: FontStyle::Normal,
            variant: FontVariant::Normal,
            weight: FontWeight::Normal,
        }
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_variant(mut self, variant: FontVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// True if the first family is one of the generic keywords.
    pub fn is_generic(&self) -> bool {
        self.family
            .first()
            .map_or(false, |family| GENERIC_FAMILIES.contains(&family.as_str()))
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(SYSTEM, SYSTEM_DEFAULT_FONT_SIZE)
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.style != FontStyle::Normal {
            write!(f, "{} ", self.style)?;
        }
        if self.variant != FontVariant::Normal {
            write!(f, "{} ", self.variant)?;
        }
        if self.weight != FontWeight::Normal {
            write!(f, "{} ", self.weight)?;
        }
        if self.size == SYSTEM_DEFAULT_FONT_SIZE {
            f.write_str("system default size ")?;
        } else {
            write!(f, "{}pt ", self.size)?;
        }
        f.write_str(&self.family.join(", "))
    }
}
