//! Fixed-step loop scheduling
//!
//! Updates and draws run on independent fixed periods (update faster than
//! draw). Hosts feed elapsed wall time; the clock answers how many update
//! ticks to run and whether a draw is due.

use crate::config::GameConfig;
use crate::consts::MAX_UPDATES_PER_FRAME;

/// What a host should do for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameWork {
    pub updates: u32,
    pub draw: bool,
}

/// Two independent fixed-period accumulators
#[derive(Debug, Clone)]
pub struct LoopClock {
    update_period_ms: f64,
    draw_period_ms: f64,
    update_accumulator: f64,
    draw_accumulator: f64,
    max_updates: u32,
}

impl LoopClock {
    pub fn new(update_period_ms: f64, draw_period_ms: f64) -> Self {
        Self {
            update_period_ms,
            draw_period_ms,
            update_accumulator: 0.0,
            // First frame always draws
            draw_accumulator: draw_period_ms,
            max_updates: MAX_UPDATES_PER_FRAME,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.update_period_ms, config.draw_period_ms)
    }

    /// Account for `elapsed_ms` of wall time
    pub fn advance(&mut self, elapsed_ms: f64) -> FrameWork {
        let elapsed_ms = elapsed_ms.max(0.0);
        self.update_accumulator += elapsed_ms;
        self.draw_accumulator += elapsed_ms;

        let mut updates = 0;
        while self.update_accumulator >= self.update_period_ms && updates < self.max_updates {
            self.update_accumulator -= self.update_period_ms;
            updates += 1;
        }
        // Spiral-of-death guard: drop time we could not catch up on
        if updates == self.max_updates {
            self.update_accumulator = self.update_accumulator.min(self.update_period_ms);
        }

        let draw = self.draw_accumulator >= self.draw_period_ms;
        if draw {
            self.draw_accumulator %= self.draw_period_ms;
        }

        FrameWork { updates, draw }
    }
}
