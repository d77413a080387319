//! Axis-aligned stage-space rectangles
//!
//! Stage coordinates grow rightward from the left edge and upward from the
//! bottom edge, matching how platforms and the jumper are positioned.
//! Only `left`, `bottom`, `width` and `height` are stored; `right` and `top`
//! are derived on every read.

use glam::Vec2;

/// A rectangle anchored at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.bottom + self.height
    }

    /// Bottom-left corner
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.bottom)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Check if a height lies within the vertical band (edges inclusive)
    pub fn spans_height(&self, y: f32) -> bool {
        y >= self.bottom && y <= self.top()
    }

    /// Check if the horizontal extents touch or overlap (edges inclusive)
    pub fn overlaps_horizontally(&self, other: &Bounds) -> bool {
        other.right() >= self.left && other.left <= self.right()
    }

    /// Horizontal center
    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }
}
