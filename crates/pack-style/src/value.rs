//! Dynamically typed style values.

use std::fmt;

use pack_core::Color;

/// A value assigned to, or read from, a style property by name.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Int(i64),
    Number(f64),
    Str(String),
    Color(Color),
    List(Vec<StyleValue>),
}

impl StyleValue {
    /// Render the value the way validation errors quote it: strings in
    /// single quotes, everything else bare.
    pub fn quoted(&self) -> String {
        match self {
            StyleValue::Str(s) => format!("'{s}'"),
            StyleValue::List(items) => {
                let items: Vec<String> = items.iter().map(StyleValue::quoted).collect();
                format!("[{}]", items.join(", "))
            }
            other => other.to_string(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            StyleValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Int(i) => write!(f, "{i}"),
            StyleValue::Number(n) => write!(f, "{n}"),
            StyleValue::Str(s) => f.write_str(s),
            StyleValue::Color(c) => write!(f, "{c}"),
            StyleValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Int(value.into())
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        StyleValue::Int(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        StyleValue::Color(value)
    }
}

impl<T: Into<StyleValue>> From<Vec<T>> for StyleValue {
    fn from(values: Vec<T>) -> Self {
        StyleValue::List(values.into_iter().map(Into::into).collect())
    }
}
