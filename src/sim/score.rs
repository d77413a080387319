//! Fixed-point score
//!
//! The score is kept in thousandths of a point so that repeated increments
//! add up exactly: ten ticks at 0.1 are always one whole point, however
//! large the score already is.

use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// A score in thousandths of a point
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Score(u64);

impl Score {
    /// Fractional steps per whole point
    pub const SCALE: u64 = 1000;

    pub const ZERO: Score = Score(0);

    pub const fn from_milli(milli: u64) -> Self {
        Score(milli)
    }

    pub const fn from_points(points: u64) -> Self {
        Score(points * Self::SCALE)
    }

    /// Quantize a per-tick rate to the nearest thousandth. `rate` must be
    /// finite and non-negative (checked by config validation).
    pub fn from_rate(rate: f32) -> Self {
        Score((f64::from(rate) * Self::SCALE as f64).round() as u64)
    }

    pub const fn milli(self) -> u64 {
        self.0
    }

    /// Whole points, floored
    pub fn whole(self) -> u32 {
        u32::try_from(self.0 / Self::SCALE).unwrap_or(u32::MAX)
    }

    /// Lossy view for display and logging
    pub fn as_f32(self) -> f32 {
        (self.0 as f64 / Self::SCALE as f64) as f32
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Score) -> Score {
        Score(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Score) {
        *self = *self + rhs;
    }
}

impl Sub for Score {
    type Output = Score;

    fn sub(self, rhs: Score) -> Score {
        Score(self.0.saturating_sub(rhs.0))
    }
}
