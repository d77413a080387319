//! State to draw commands
//!
//! The simulation never touches presentation. A host asks for draw commands
//! and maps them onto whatever it renders with (canvas, DOM, GPU).
//! Coordinates are stage-local with the origin at the bottom-left corner.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GamePhase, GameState};

/// A single thing for the host to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Vertical background scroll offset
    Background { offset_y: f32 },
    /// Displayed (floored) score
    Score { value: u32 },
    /// Ids of platforms still alive; hosts that keep per-platform visuals drop the rest
    Retain { ids: Vec<u32> },
    Platform { id: u32, origin: Vec2, size: Vec2 },
    Jumper {
        origin: Vec2,
        size: Vec2,
        facing_right: bool,
        is_jumping: bool,
    },
    /// Run ended; show the final score
    GameOver { score: u32 },
}

fn jumper_command(state: &GameState) -> DrawCommand {
    let jumper = &state.jumper;
    DrawCommand::Jumper {
        origin: jumper.bounds.origin(),
        size: jumper.bounds.size(),
        facing_right: jumper.facing_right,
        is_jumping: jumper.is_jumping(),
    }
}

/// Full frame, back to front
pub fn render(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(state.field.len() + 4);
    commands.push(DrawCommand::Background {
        offset_y: state.background_offset,
    });
    commands.extend(state.field.iter().map(|p| DrawCommand::Platform {
        id: p.id,
        origin: p.bounds.origin(),
        size: p.bounds.size(),
    }));
    commands.push(jumper_command(state));
    commands.push(DrawCommand::Score {
        value: state.display_score(),
    });
    if state.phase == GamePhase::GameOver {
        commands.push(DrawCommand::GameOver {
            score: state.display_score(),
        });
    }
    commands
}

/// Only what changed since the previous call; clears the dirty flags
pub fn render_dirty(state: &mut GameState) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Retain {
        ids: state.field.iter().map(|p| p.id).collect(),
    }];

    if state.needs_draw {
        commands.push(DrawCommand::Background {
            offset_y: state.background_offset,
        });
        commands.push(DrawCommand::Score {
            value: state.display_score(),
        });
        state.needs_draw = false;
    }

    for platform in state.field.iter_mut().filter(|p| p.needs_draw) {
        commands.push(DrawCommand::Platform {
            id: platform.id,
            origin: platform.bounds.origin(),
            size: platform.bounds.size(),
        });
        platform.needs_draw = false;
    }

    if state.jumper.needs_draw {
        commands.push(jumper_command(state));
        state.jumper.needs_draw = false;
    }

    if state.phase == GamePhase::GameOver {
        commands.push(DrawCommand::GameOver {
            score: state.display_score(),
        });
    }
    commands
}
