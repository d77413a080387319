//! Fixed timestep simulation tick
//!
//! One call advances the session by one update period. Order within a tick:
//! decide whether the stage advances, scroll score and background, update the
//! platform field, then update the jumper and check for the fall.

use super::autopilot;
use super::jumper::JumperEvent;
use super::state::{GameEvent, GamePhase, GameState};
use crate::input::Intent;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Steering change; steering persists until the next intent
    pub intent: Option<Intent>,
    /// Start a session waiting in `Ready`
    pub start: bool,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - autopilot steers the jumper
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep.
///
/// Returns `Some(GameEvent::GameOver)` on the tick the jumper falls off the
/// stage; every later tick is a no-op until the session is restarted.
pub fn tick(state: &mut GameState, input: &TickInput) -> Option<GameEvent> {
    if input.start {
        state.start_session();
    }

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return None;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            _ => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return None;
    }

    let intent = if input.idle_mode {
        Some(autopilot::steer(state))
    } else {
        input.intent
    };
    if let Some(intent) = intent {
        state.apply_intent(intent);
    }

    state.time_ticks += 1;

    // The stage advances whenever the jumper is above the line, rising or not
    let advancing = state.jumper.bottom() > state.config.advancing_line;
    state.is_advancing = advancing;
    if advancing {
        state.record_advance();
    }

    state.field.update(advancing, &state.config, &mut state.rng);

    match state.jumper.update(advancing, &state.field, &state.config) {
        Some(JumperEvent::FellOffStage) => {
            state.phase = GamePhase::GameOver;
            let score = state.display_score();
            log::info!(
                "Game over: score {} after {} ticks (seed {})",
                score,
                state.time_ticks,
                state.seed
            );
            Some(GameEvent::GameOver { score })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::Score;

    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new(GameConfig::default(), seed).unwrap();
        state.start_session();
        state
    }

    #[test]
    fn test_ready_session_does_not_move() {
        let mut state = GameState::new(GameConfig::default(), 12345).unwrap();
        let bottom = state.jumper.bottom();
        for _ in 0..10 {
            assert_eq!(tick(&mut state, &TickInput::default()), None);
        }
        assert_eq!(state.jumper.bottom(), bottom);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_start_input_begins_play() {
        let mut state = GameState::new(GameConfig::default(), 12345).unwrap();
        let bottom = state.jumper.bottom();
        let input = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.jumper.bottom(), bottom + state.config.jump_speed);
    }

    #[test]
    fn test_tick_pause() {
        let mut state = playing(12345);
        let input = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Paused);

        let bottom = state.jumper.bottom();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.jumper.bottom(), bottom);

        // Unpause
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_ne!(state.jumper.bottom(), bottom);
    }

    #[test]
    fn test_intent_persists() {
        let mut state = playing(1);
        state.jumper.bounds.left = 100.0;
        let input = TickInput {
            intent: Some(Intent::MoveRight),
            ..Default::default()
        };
        tick(&mut state, &input);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.jumper.bounds.left, 112.0);
    }

    #[test]
    fn test_not_advancing_below_line() {
        let mut state = playing(1);
        for _ in 0..5 {
            tick(&mut state, &TickInput::default());
            assert!(!state.is_advancing);
        }
        assert_eq!(state.score(), Score::ZERO);
        assert_eq!(state.background_offset, 0.0);
    }

    #[test]
    fn test_advancing_scrolls_world_not_jumper() {
        let mut state = playing(1);
        state.jumper.bounds.bottom = state.config.advancing_line + 1.0;
        let bottom = state.jumper.bottom();
        let lowest = state.field.lowest().unwrap().bottom();
        let lowest_id = state.field.lowest().unwrap().id;

        tick(&mut state, &TickInput::default());
        assert!(state.is_advancing);
        assert_eq!(state.jumper.bottom(), bottom);
        assert_eq!(state.field.lowest().unwrap().id, lowest_id);
        assert_eq!(state.field.lowest().unwrap().bottom(), lowest - state.config.jump_speed);
        assert_eq!(state.background_offset, state.config.stage_move_speed);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = playing(99999);
        let mut state2 = playing(99999);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        for _ in 0..2000 {
            let e1 = tick(&mut state1, &input);
            let e2 = tick(&mut state2, &input);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score(), state2.score());
        assert_eq!(state1.field.len(), state2.field.len());
        assert_eq!(state1.jumper.bounds, state2.jumper.bounds);
    }
}
