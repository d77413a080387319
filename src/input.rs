//! Player input
//!
//! The simulation only understands three steering intents. Hosts translate
//! their own events (keys, on-screen buttons, touches) into these.

use serde::{Deserialize, Serialize};

/// A steering request from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    MoveStraight,
}

/// Map a pressed key (DOM `KeyboardEvent.key` naming) to an intent
pub fn intent_for_key_down(key: &str) -> Option<Intent> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(Intent::MoveLeft),
        "ArrowRight" | "d" | "D" => Some(Intent::MoveRight),
        _ => None,
    }
}

/// Releasing any key stops steering
pub fn intent_for_key_up() -> Intent {
    Intent::MoveStraight
}

/// On-screen steering: pressing the left half of the stage steers left,
/// the right half steers right
pub fn intent_for_pointer(x: f32, stage_width: f32) -> Intent {
    if x < stage_width / 2.0 {
        Intent::MoveLeft
    } else {
        Intent::MoveRight
    }
}
