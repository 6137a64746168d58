//! Natural sizes reported by leaf widgets.

/// A natural size along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intrinsic {
    /// No natural size; the box takes whatever it is allocated.
    #[default]
    Unset,
    /// An exact size that never stretches.
    Fixed(i32),
    /// A minimum that flex distribution may grow.
    AtLeast(i32),
}

impl Intrinsic {
    /// The minimum for a flexible size.
    pub fn at_least(&self) -> Option<i32> {
        match self {
            Intrinsic::AtLeast(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<i32> for Intrinsic {
    fn from(value: i32) -> Self {
        Intrinsic::Fixed(value)
    }
}

/// Natural width and height of a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntrinsicSize {
    pub width: Intrinsic,
    pub height: Intrinsic,
}

impl IntrinsicSize {
    pub fn new(width: impl Into<Intrinsic>, height: impl Into<Intrinsic>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Both axes exact.
    pub fn fixed(width: i32, height: i32) -> Self {
        Self::new(Intrinsic::Fixed(width), Intrinsic::Fixed(height))
    }

    /// Both axes flexible minimums.
    pub fn at_least(width: i32, height: i32) -> Self {
        Self::new(Intrinsic::AtLeast(width), Intrinsic::AtLeast(height))
    }
}
