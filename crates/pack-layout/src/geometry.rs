//! Layout results.

/// The computed box of one node.
///
/// Offsets are relative to the parent's content box. Only the root carries
/// trailing offsets (`content_right`, `content_bottom`): its own padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub content_width: i32,
    pub content_height: i32,
    pub min_content_width: i32,
    pub min_content_height: i32,
    pub content_left: i32,
    pub content_top: i32,
    pub content_right: i32,
    pub content_bottom: i32,
}

impl Geometry {
    /// Content plus leading and trailing offsets, saturating at `i32::MAX`.
    pub fn width(&self) -> i32 {
        total(self.content_left, self.content_width, self.content_right)
    }

    pub fn height(&self) -> i32 {
        total(self.content_top, self.content_height, self.content_bottom)
    }

    pub fn min_width(&self) -> i32 {
        total(self.content_left, self.min_content_width, self.content_right)
    }

    pub fn min_height(&self) -> i32 {
        total(self.content_top, self.min_content_height, self.content_bottom)
    }
}

fn total(leading: i32, content: i32, trailing: i32) -> i32 {
    leading.saturating_add(content).saturating_add(trailing)
}

/// Axis-aligned rectangle in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Check if a point is inside the bounds. Right and bottom edges are
    /// exclusive, so adjacent siblings never both contain a point.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}
