//! The space a layout is computed for.

/// Resolution at which style values map one-to-one onto pixels.
pub const BASELINE_DPI: f64 = 96.0;

/// Available size and resolution for a layout pass.
///
/// The default is a 0×0 viewport, which lays every node out at its
/// minimum size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub dpi: f64,
}

impl Viewport {
    /// A viewport at baseline resolution.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            dpi: BASELINE_DPI,
        }
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    /// Convert a style value (width, height, padding) to pixels.
    pub fn scale(&self, value: i32) -> i32 {
        (f64::from(value) * self.dpi / BASELINE_DPI) as i32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
