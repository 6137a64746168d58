//! Keyword values used by Pack style properties.

use std::fmt;
use std::str::FromStr;

/// Declares a keyword enum with its CSS-style spelling.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $keyword:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every keyword accepted for this value, in declaration order.
            pub const KEYWORDS: &'static [&'static str] = &[$($keyword),+];

            /// The keyword spelling of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $keyword, )+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownKeyword;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $keyword => Ok($name::$variant), )+
                    _ => Err(UnknownKeyword(s.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// A string that does not name any keyword of the requested kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeyword(pub String);

impl fmt::Display for UnknownKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown keyword '{}'", self.0)
    }
}

impl std::error::Error for UnknownKeyword {}

keyword_enum! {
    /// The axis along which a box lays out its children.
    #[derive(Default)]
    pub enum Direction {
        #[default]
        Row => "row",
        Column => "column",
    }
}

keyword_enum! {
    /// Cross-axis alignment of children.
    ///
    /// `Top`/`Left`/`Start` align to the start of the cross axis,
    /// `Bottom`/`Right`/`End` to the end. Which ones take effect depends on
    /// the container's direction.
    pub enum Alignment {
        Left => "left",
        Right => "right",
        Top => "top",
        Bottom => "bottom",
        Center => "center",
        Start => "start",
        End => "end",
    }
}

keyword_enum! {
    /// Alignment of text inside a widget.
    pub enum TextAlign {
        Left => "left",
        Right => "right",
        Center => "center",
        Justify => "justify",
    }
}

keyword_enum! {
    /// The natural direction of horizontal content.
    #[derive(Default)]
    pub enum TextDirection {
        #[default]
        Ltr => "ltr",
        Rtl => "rtl",
    }
}

keyword_enum! {
    /// Whether a node takes part in the Pack layout at all.
    #[derive(Default)]
    pub enum Display {
        #[default]
        Pack => "pack",
        None => "none",
    }
}

keyword_enum! {
    /// Whether a node is drawn. Hidden nodes keep their space; only
    /// `Hidden` hides a widget.
    #[derive(Default)]
    pub enum Visibility {
        #[default]
        Visible => "visible",
        Hidden => "hidden",
        None => "none",
    }
}

keyword_enum! {
    /// Font slant.
    #[derive(Default)]
    pub enum FontStyle {
        #[default]
        Normal => "normal",
        Italic => "italic",
        Oblique => "oblique",
    }
}

keyword_enum! {
    /// Font variant.
    #[derive(Default)]
    pub enum FontVariant {
        #[default]
        Normal => "normal",
        SmallCaps => "small-caps",
    }
}

keyword_enum! {
    /// Font weight.
    #[derive(Default)]
    pub enum FontWeight {
        #[default]
        Normal => "normal",
        Bold => "bold",
    }
}

impl Alignment {
    /// True if this alignment puts children at the end of a row's cross
    /// (vertical) axis.
    pub fn is_row_end(&self) -> bool {
        matches!(self, Alignment::Bottom | Alignment::End)
    }

    /// True if this alignment puts children at the end of a column's cross
    /// (horizontal) axis.
    pub fn is_column_end(&self) -> bool {
        matches!(self, Alignment::Right | Alignment::End)
    }
}
