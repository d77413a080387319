//! Idle/demo mode steering
//!
//! Picks the highest platform the jumper can still come down on and steers
//! toward it. Used for attract mode and the headless demo.

use super::platform::Platform;
use super::state::GameState;
use crate::input::Intent;

/// Highest platform whose top is no higher than the current jump's apex
pub fn landing_target(state: &GameState) -> Option<&Platform> {
    let jumper = &state.jumper;
    let apex = if jumper.is_jumping() {
        jumper.bottom() + (state.config.jumper_max_height - jumper.jump_height()).max(0.0)
    } else {
        jumper.bottom()
    };

    state.field.iter().rev().find(|p| p.top() <= apex)
}

/// Steering intent that brings the jumper over its landing target
pub fn steer(state: &GameState) -> Intent {
    let Some(target) = landing_target(state) else {
        return Intent::MoveStraight;
    };

    let offset = target.bounds.center_x() - state.jumper.bounds.center_x();
    // Dead zone of one step avoids jittering around the target
    let dead_zone = state.config.left_right_speed;
    if offset > dead_zone {
        Intent::MoveRight
    } else if offset < -dead_zone {
        Intent::MoveLeft
    } else {
        Intent::MoveStraight
    }
}
