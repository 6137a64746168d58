//! Legal value sets for style properties.

use std::fmt;

use pack_core::Color;

use crate::value::StyleValue;

/// The set of values a property accepts.
///
/// A value is legal if it matches one of the keyword `constants` exactly,
/// or if it can be interpreted as one of the enabled value kinds. Validation
/// normalizes the value: integers are truncated, numbers widened to floats
/// and color strings parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choices {
    pub constants: &'static [&'static str],
    pub integer: bool,
    pub number: bool,
    pub color: bool,
    pub string: bool,
    /// Reject integers and numbers below zero
    pub non_negative: bool,
}

impl Choices {
    pub const fn new(constants: &'static [&'static str]) -> Self {
        Self {
            constants,
            integer: false,
            number: false,
            color: false,
            string: false,
            non_negative: false,
        }
    }

    pub const fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    pub const fn number(mut self) -> Self {
        self.number = true;
        self
    }

    pub const fn color(mut self) -> Self {
        self.color = true;
        self
    }

    pub const fn string(mut self) -> Self {
        self.string = true;
        self
    }

    pub const fn non_negative(mut self) -> Self {
        self.non_negative = true;
        self
    }

    /// Validate and normalize a value, returning `None` if it is not legal.
    pub fn validate(&self, value: &StyleValue) -> Option<StyleValue> {
        if let StyleValue::Str(s) = value {
            if self.constants.contains(&s.as_str()) {
                return Some(value.clone());
            }
        }

        if self.integer {
            if let Some(i) = self.as_integer(value) {
                return Some(StyleValue::Int(i));
            }
        }

        if self.number {
            if let Some(n) = self.as_number(value) {
                return Some(StyleValue::Number(n));
            }
        }

        if self.color {
            match value {
                StyleValue::Color(c) => return Some(StyleValue::Color(*c)),
                StyleValue::Str(s) => {
                    if let Ok(c) = Color::parse(s) {
                        return Some(StyleValue::Color(c));
                    }
                }
                _ => {}
            }
        }

        if self.string {
            if let StyleValue::Str(_) = value {
                return Some(value.clone());
            }
        }

        None
    }

    fn as_integer(&self, value: &StyleValue) -> Option<i64> {
        let i = match value {
            StyleValue::Int(i) => *i,
            StyleValue::Number(n) if n.is_finite() => n.trunc() as i64,
            StyleValue::Str(s) => s.trim().parse::<i64>().ok()?,
            _ => return None,
        };
        (!self.non_negative || i >= 0).then_some(i)
    }

    fn as_number(&self, value: &StyleValue) -> Option<f64> {
        let n = match value {
            StyleValue::Int(i) => *i as f64,
            StyleValue::Number(n) => *n,
            StyleValue::Str(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        (n.is_finite() && (!self.non_negative || n >= 0.0)).then_some(n)
    }
}

impl fmt::Display for Choices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<&str> = self.constants.to_vec();
        parts.sort_unstable();
        if self.string {
            parts.push("<string>");
        }
        if self.integer {
            parts.push("<integer>");
        }
        if self.number {
            parts.push("<number>");
        }
        if self.color {
            parts.push("<color>");
        }
        f.write_str(&parts.join(", "))
    }
}
