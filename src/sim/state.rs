//! Session state
//!
//! A `GameState` is one play session: the platform field, the jumper, the
//! score and the scroll position. Hosts construct it, feed it ticks and
//! intents, and read it back for drawing. Nothing here is global.

use serde::{Deserialize, Serialize};

use super::field::PlatformField;
use super::jumper::Jumper;
use super::rng::RandomBias;
use super::score::Score;
use crate::config::{ConfigError, GameConfig};
use crate::input::Intent;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Field laid out, jumper on the lowest platform, waiting for start
    Ready,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Jumper fell below the stage
    GameOver,
}

/// Notifications for the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The run ended with this displayed score
    GameOver { score: u32 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Seed the current layout was generated from
    pub seed: u64,
    pub(crate) rng: RandomBias,
    pub field: PlatformField,
    pub jumper: Jumper,
    pub phase: GamePhase,
    /// World is scrolling instead of the jumper rising (derived each tick)
    pub is_advancing: bool,
    /// Background scroll, grows while advancing
    pub background_offset: f32,
    score: Score,
    /// Score rate quantized once at construction
    score_per_tick: Score,
    /// Simulation tick counter (playing ticks only)
    pub time_ticks: u64,
    /// Score or background changed since the last draw pass
    pub needs_draw: bool,
}

impl GameState {
    /// Create a session ready to start
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            log::warn!("Rejected game config: {}", e);
            return Err(e);
        }

        let jumper = Jumper::new(&config);
        let score_per_tick = Score::from_rate(config.score_increase_rate);
        let mut state = Self {
            config,
            seed,
            rng: RandomBias::new(seed),
            field: PlatformField::new(),
            jumper,
            phase: GamePhase::Ready,
            is_advancing: false,
            background_offset: 0.0,
            score: Score::ZERO,
            score_per_tick,
            time_ticks: 0,
            needs_draw: true,
        };
        state.prepare();
        Ok(state)
    }

    /// Lay out a fresh field and stand a fresh jumper on its lowest platform
    fn prepare(&mut self) {
        self.field.clear();
        self.field.populate(&self.config, &mut self.rng);

        self.jumper = Jumper::new(&self.config);
        if let Some(lowest) = self.field.lowest() {
            self.jumper.set_starting_platform(lowest);
        }

        self.phase = GamePhase::Ready;
        self.is_advancing = false;
        self.background_offset = 0.0;
        self.score = Score::ZERO;
        self.time_ticks = 0;
        self.needs_draw = true;
    }

    /// Begin play. Only a session in `Ready` can start.
    pub fn start_session(&mut self) -> bool {
        if self.phase != GamePhase::Ready {
            return false;
        }
        self.phase = GamePhase::Playing;
        log::info!("Session started (seed {})", self.seed);
        true
    }

    /// Throw the current run away and prepare a new one with a new seed
    pub fn restart_session(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = RandomBias::new(seed);
        self.prepare();
        log::info!("Session restarted (seed {})", seed);
    }

    /// Steer the jumper
    pub fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::MoveLeft => self.jumper.move_left(),
            Intent::MoveRight => self.jumper.move_right(),
            Intent::MoveStraight => self.jumper.move_straight(),
        }
    }

    /// Exact fractional score
    pub fn score(&self) -> Score {
        self.score
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u32 {
        self.score.whole()
    }

    pub(crate) fn record_advance(&mut self) {
        self.background_offset += self.config.stage_move_speed;
        self.score += self.score_per_tick;
        self.needs_draw = true;
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_session_is_ready() {
        let state = GameState::new(GameConfig::default(), 12345).unwrap();
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score(), Score::ZERO);
        assert!(!state.field.is_empty());
    }

    #[test]
    fn test_jumper_starts_on_lowest_platform() {
        let state = GameState::new(GameConfig::default(), 1).unwrap();
        let lowest = state.field.lowest().unwrap();
        assert_eq!(state.jumper.bounds.left, lowest.left());
        assert_eq!(state.jumper.bottom(), lowest.top());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            stage_height: 0.0,
            ..Default::default()
        };
        assert!(GameState::new(config, 1).is_err());
    }

    #[test]
    fn test_start_only_from_ready() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        assert!(state.start_session());
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.start_session());
    }

    #[test]
    fn test_score_accumulates_exactly() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        for _ in 0..10 {
            state.record_advance();
        }
        assert_eq!(state.score(), Score::from_points(1));
        assert_eq!(state.display_score(), 1);
        assert_eq!(state.background_offset, 10.0);
    }

    proptest! {
        #[test]
        fn prop_ten_advances_add_one_point(start in 0usize..2_000) {
            let mut state = GameState::new(GameConfig::default(), 1).unwrap();
            for _ in 0..start {
                state.record_advance();
            }
            let before = state.score();
            for _ in 0..10 {
                state.record_advance();
            }
            prop_assert_eq!(state.score() - before, Score::from_points(1));
            prop_assert_eq!(state.display_score(), before.whole() + 1);
        }
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(GameConfig::default(), 1).unwrap();
        state.start_session();
        state.record_advance();
        state.apply_intent(Intent::MoveLeft);
        state.restart_session(2);

        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score(), Score::ZERO);
        assert_eq!(state.background_offset, 0.0);
        assert_eq!(state.seed, 2);
        assert!(state.jumper.facing_right);
        assert_eq!(state.field.lowest().unwrap().bottom(), state.config.platform_starting_bottom);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::new(GameConfig::default(), 99999).unwrap();
        let b = GameState::new(GameConfig::default(), 99999).unwrap();
        let lefts_a: Vec<f32> = a.field.iter().map(|p| p.left()).collect();
        let lefts_b: Vec<f32> = b.field.iter().map(|p| p.left()).collect();
        assert_eq!(lefts_a, lefts_b);
    }
}
