//! The jumper
//!
//! The jumper never stops bouncing: it rises for a fixed height, falls until
//! its feet touch a platform, and rises again. The player only steers.

use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::field::PlatformField;
use super::platform::Platform;
use crate::config::GameConfig;
use crate::consts::{JUMPER_START_BOTTOM, JUMPER_START_LEFT};

/// Horizontal steering intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    #[default]
    Straight,
}

/// Something notable that happened during a jumper update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumperEvent {
    /// Reached the top of a jump
    StartedFalling,
    /// Feet touched a platform; a new jump begins
    Landed,
    /// Dropped completely below the stage
    FellOffStage,
}

/// The player character
#[derive(Debug, Clone)]
pub struct Jumper {
    pub bounds: Bounds,
    /// Rising (true) or falling (false)
    is_jumping: bool,
    /// Height gained during the current jump
    jump_height: f32,
    pub direction: Direction,
    pub facing_right: bool,
    /// Position, facing or rising/falling changed since the last draw pass
    pub needs_draw: bool,
}

impl Jumper {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            bounds: Bounds::new(
                JUMPER_START_LEFT,
                JUMPER_START_BOTTOM,
                config.jumper_width,
                config.jumper_height,
            ),
            is_jumping: true,
            jump_height: 0.0,
            direction: Direction::Straight,
            facing_right: true,
            needs_draw: true,
        }
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn jump_height(&self) -> f32 {
        self.jump_height
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.bounds.bottom
    }

    pub fn move_left(&mut self) {
        if self.facing_right {
            self.needs_draw = true;
        }
        self.facing_right = false;
        self.direction = Direction::Left;
    }

    pub fn move_right(&mut self) {
        if !self.facing_right {
            self.needs_draw = true;
        }
        self.facing_right = true;
        self.direction = Direction::Right;
    }

    pub fn move_straight(&mut self) {
        self.direction = Direction::Straight;
    }

    /// Stand on top of a platform (session start)
    pub fn set_starting_platform(&mut self, platform: &Platform) {
        self.bounds.left = platform.left();
        self.bounds.bottom = platform.top();
        self.needs_draw = true;
    }

    fn fall(&mut self) {
        if self.is_jumping {
            self.needs_draw = true;
        }
        self.is_jumping = false;
    }

    fn jump(&mut self) {
        if !self.is_jumping {
            self.needs_draw = true;
        }
        self.is_jumping = true;
        self.jump_height = 0.0;
    }

    fn move_horizontally(&mut self, speed: f32, stage_width: f32) {
        match self.direction {
            Direction::Left if self.bounds.left > 0.0 => {
                self.bounds.left = (self.bounds.left - speed).max(0.0);
            }
            Direction::Right if self.bounds.right() < stage_width => {
                self.bounds.left = (self.bounds.left + speed).min(stage_width);
            }
            _ => {}
        }
    }

    /// Advance one tick.
    ///
    /// While the stage is advancing a rising jumper holds its position and the
    /// world scrolls down in its place. At most one rising/falling transition
    /// happens per tick.
    pub fn update(
        &mut self,
        advancing: bool,
        field: &PlatformField,
        config: &GameConfig,
    ) -> Option<JumperEvent> {
        if self.is_jumping {
            self.jump_height += config.jump_speed;
            if !advancing {
                self.bounds.bottom += config.jump_speed;
            }
        } else {
            self.bounds.bottom -= config.fall_speed;
        }

        self.move_horizontally(config.left_right_speed, config.stage_width);
        self.needs_draw = true;

        if self.bounds.top() <= 0.0 {
            return Some(JumperEvent::FellOffStage);
        }

        if self.is_jumping {
            if self.jump_height >= config.jumper_max_height {
                self.fall();
                return Some(JumperEvent::StartedFalling);
            }
        } else if field.landing_check(&self.bounds) {
            self.jump();
            return Some(JumperEvent::Landed);
        }

        None
    }
}
