//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (platform creation order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod bounds;
pub mod collision;
pub mod field;
pub mod jumper;
pub mod platform;
pub mod rng;
pub mod score;
pub mod state;
pub mod tick;

pub use bounds::Bounds;
pub use collision::{lands_on, lands_on_any};
pub use field::PlatformField;
pub use jumper::{Direction, Jumper, JumperEvent};
pub use platform::Platform;
pub use rng::RandomBias;
pub use score::Score;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
