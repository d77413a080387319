//! Game configuration
//!
//! Every tunable lives here. Values are validated once at session
//! construction; the simulation itself never re-checks them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// How the platform field keeps the stage supplied with platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationStrategy {
    /// Create platforms above the stage as it scrolls, destroy them below it
    #[default]
    Biased,
    /// Keep a fixed number of platforms, teleporting reclaimed ones to the top
    Recycle { count: usize },
}

impl GenerationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStrategy::Biased => "biased",
            GenerationStrategy::Recycle { .. } => "recycle",
        }
    }

    /// Switch to the other strategy (host toggle)
    pub fn cycled(self) -> Self {
        match self {
            GenerationStrategy::Biased => GenerationStrategy::Recycle {
                count: RECYCLE_PLATFORM_COUNT,
            },
            GenerationStrategy::Recycle { .. } => GenerationStrategy::Biased,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "biased" => Some(GenerationStrategy::Biased),
            "recycle" | "recycling" => Some(GenerationStrategy::Recycle {
                count: RECYCLE_PLATFORM_COUNT,
            }),
            _ => None,
        }
    }
}

/// Configuration rejected at construction
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("stage must have positive size, got {width}x{height}")]
    EmptyStage { width: f32, height: f32 },
    #[error("{name} must have positive size, got {width}x{height}")]
    EmptyBox {
        name: &'static str,
        width: f32,
        height: f32,
    },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("platform width {platform} does not fit on a stage {stage} wide")]
    PlatformTooWide { platform: f32, stage: f32 },
    #[error("max platform gap {gap} exceeds the max jump height {jump}")]
    GapTooLarge { gap: f32, jump: f32 },
    #[error("advancing line {line} lies outside the stage (height {height})")]
    AdvancingLineOutsideStage { line: f32, height: f32 },
    #[error("score increase rate must be finite and not negative, got {0}")]
    InvalidScoreRate(f32),
    #[error("{name} tick period must be positive, got {value}ms")]
    NonPositivePeriod { name: &'static str, value: f64 },
    #[error("recycling strategy needs at least one platform")]
    EmptyRecycleField,
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Stage ===
    pub stage_width: f32,
    pub stage_height: f32,
    /// Jumper bottom above which the stage advances
    pub advancing_line: f32,
    /// Background scroll per advancing tick
    pub stage_move_speed: f32,

    // === Platforms ===
    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_starting_bottom: f32,
    /// Largest vertical gap from one platform's top to the next one's bottom
    pub max_platform_gap: f32,
    pub generation: GenerationStrategy,

    // === Jumper ===
    pub jumper_width: f32,
    pub jumper_height: f32,
    /// Height gained in a single jump before falling
    pub jumper_max_height: f32,
    pub jump_speed: f32,
    pub fall_speed: f32,
    pub left_right_speed: f32,

    // === Scoring ===
    pub score_increase_rate: f32,

    // === Loop timing ===
    pub update_period_ms: f64,
    pub draw_period_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stage_width: STAGE_WIDTH,
            stage_height: STAGE_HEIGHT,
            advancing_line: PLATFORM_ADVANCING_LINE,
            stage_move_speed: STAGE_MOVE_SPEED,

            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_starting_bottom: PLATFORM_STARTING_BOTTOM,
            max_platform_gap: MAX_PLATFORM_GAP,
            generation: GenerationStrategy::Biased,

            jumper_width: JUMPER_WIDTH,
            jumper_height: JUMPER_HEIGHT,
            jumper_max_height: JUMPER_MAX_HEIGHT,
            jump_speed: JUMPER_JUMP_SPEED,
            fall_speed: JUMPER_FALL_SPEED,
            left_right_speed: JUMPER_LEFT_RIGHT_SPEED,

            score_increase_rate: SCORE_INCREASE_RATE,

            update_period_ms: UPDATE_PERIOD_MS,
            draw_period_ms: DRAW_PERIOD_MS,
        }
    }
}

impl GameConfig {
    /// Derive the max platform gap from the jump height (90%, floored)
    pub fn with_jumper_max_height(mut self, height: f32) -> Self {
        self.jumper_max_height = height;
        self.max_platform_gap = (height * 0.9).floor();
        self
    }

    pub fn with_generation(mut self, generation: GenerationStrategy) -> Self {
        self.generation = generation;
        self
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.stage_width > 0.0 && self.stage_height > 0.0) {
            return Err(ConfigError::EmptyStage {
                width: self.stage_width,
                height: self.stage_height,
            });
        }
        for (name, width, height) in [
            ("platform", self.platform_width, self.platform_height),
            ("jumper", self.jumper_width, self.jumper_height),
        ] {
            if !(width > 0.0 && height > 0.0) {
                return Err(ConfigError::EmptyBox {
                    name,
                    width,
                    height,
                });
            }
        }
        for (name, value) in [
            ("jump speed", self.jump_speed),
            ("fall speed", self.fall_speed),
            ("left/right speed", self.left_right_speed),
            ("stage move speed", self.stage_move_speed),
            ("max jump height", self.jumper_max_height),
            ("max platform gap", self.max_platform_gap),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.platform_width > self.stage_width {
            return Err(ConfigError::PlatformTooWide {
                platform: self.platform_width,
                stage: self.stage_width,
            });
        }
        if self.max_platform_gap > self.jumper_max_height {
            return Err(ConfigError::GapTooLarge {
                gap: self.max_platform_gap,
                jump: self.jumper_max_height,
            });
        }
        if !(self.advancing_line > 0.0 && self.advancing_line < self.stage_height) {
            return Err(ConfigError::AdvancingLineOutsideStage {
                line: self.advancing_line,
                height: self.stage_height,
            });
        }
        if !(self.score_increase_rate >= 0.0 && self.score_increase_rate.is_finite()) {
            return Err(ConfigError::InvalidScoreRate(self.score_increase_rate));
        }
        for (name, value) in [
            ("update", self.update_period_ms),
            ("draw", self.draw_period_ms),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositivePeriod { name, value });
            }
        }
        if self.generation == (GenerationStrategy::Recycle { count: 0 }) {
            return Err(ConfigError::EmptyRecycleField);
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "jumper_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Config saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
