//! Skyward Jumper - an endless platform-jumping game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (platform generation, landing, stage scroll)
//! - `config`: Validated, serializable game tunables
//! - `render`: Pure state-to-draw-command translation
//! - `input`: Key name to steering intent mapping
//! - `clock`: Fixed-step update/draw scheduling

pub mod clock;
pub mod config;
pub mod input;
pub mod render;
pub mod sim;

pub use clock::LoopClock;
pub use config::{ConfigError, GameConfig, GenerationStrategy};
pub use input::Intent;
pub use render::{DrawCommand, render, render_dirty};

/// Game configuration constants
pub mod consts {
    /// Update tick period (state mutation only)
    pub const UPDATE_PERIOD_MS: f64 = 10.0;
    /// Draw tick period (render only)
    pub const DRAW_PERIOD_MS: f64 = 30.0;
    /// Maximum update ticks per host frame to prevent spiral of death
    pub const MAX_UPDATES_PER_FRAME: u32 = 25;

    /// Stage dimensions
    pub const STAGE_WIDTH: f32 = 400.0;
    pub const STAGE_HEIGHT: f32 = 600.0;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 85.0;
    pub const PLATFORM_HEIGHT: f32 = 15.0;
    /// Bottom of the very first platform
    pub const PLATFORM_STARTING_BOTTOM: f32 = 100.0;
    /// Jumper bottom above which the world scrolls instead of the jumper
    pub const PLATFORM_ADVANCING_LINE: f32 = 400.0;

    /// Background scroll per advancing tick
    pub const STAGE_MOVE_SPEED: f32 = 1.0;

    /// Jumper defaults
    pub const JUMPER_WIDTH: f32 = 60.0;
    pub const JUMPER_HEIGHT: f32 = 85.0;
    pub const JUMPER_MAX_HEIGHT: f32 = 250.0;
    pub const JUMPER_JUMP_SPEED: f32 = 8.0;
    pub const JUMPER_FALL_SPEED: f32 = 5.0;
    pub const JUMPER_LEFT_RIGHT_SPEED: f32 = 6.0;
    /// Jumper box before it is placed on the first platform
    pub const JUMPER_START_LEFT: f32 = 50.0;
    pub const JUMPER_START_BOTTOM: f32 = 150.0;

    /// Largest vertical gap between consecutive platforms (90% of a jump)
    pub const MAX_PLATFORM_GAP: f32 = 225.0;

    /// Score gained per advancing tick
    pub const SCORE_INCREASE_RATE: f32 = 0.1;

    /// Platform count for the fixed-size recycling strategy
    pub const RECYCLE_PLATFORM_COUNT: usize = 5;
}
