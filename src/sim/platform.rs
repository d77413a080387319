//! A single platform

use super::bounds::Bounds;

/// A platform the jumper can land on
#[derive(Debug, Clone)]
pub struct Platform {
    /// Creation order, unique within a session
    pub id: u32,
    pub bounds: Bounds,
    /// Position changed since the last draw pass
    pub needs_draw: bool,
}

impl Platform {
    pub fn new(id: u32, left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            bounds: Bounds::new(left, bottom, width, height),
            needs_draw: true,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.bounds.left
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.bounds.bottom
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.bounds.top()
    }

    /// Shift down by `amount` as the stage advances
    pub fn advance(&mut self, amount: f32) {
        self.bounds.bottom -= amount;
        self.needs_draw = true;
    }

    /// Top edge has scrolled off the bottom of the stage
    pub fn is_below_stage(&self) -> bool {
        self.top() < 0.0
    }

    /// Teleport to a new position under a new creation id (recycling)
    pub fn relocate(&mut self, id: u32, left: f32, bottom: f32) {
        self.id = id;
        self.bounds.left = left;
        self.bounds.bottom = bottom;
        self.needs_draw = true;
    }
}
