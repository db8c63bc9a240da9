//! Game configuration types.
//!
//! Everything tunable lives here:
//! - `ElevationConfig`: Rest, raised, and idle-bob heights for entities
//! - `SoundConfig`: Turn cue variation and repeat avoidance
//! - `GameConfig`: Combines all configuration
//!
//! Configurations are plain serde structs so a host can load them from
//! whatever format it already uses.

use serde::{Deserialize, Serialize};

use super::error::{SetupError, SetupResult};

/// Entity heights, in world units along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElevationConfig {
    /// Height of an idle entity.
    pub rest: f32,

    /// Height of an engaged entity.
    pub raised: f32,

    /// Extra height applied on the "up" beat while idle.
    pub bob_offset: f32,
}

impl Default for ElevationConfig {
    fn default() -> Self {
        Self {
            rest: 0.0,
            raised: 1.0,
            bob_offset: 0.1,
        }
    }
}

/// Sound variation for the turn-passed cue.
///
/// With `turn_clips == 0` no cue is requested at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundConfig {
    /// Number of interchangeable clips for the turn-passed cue.
    pub turn_clips: usize,

    /// How many recent picks are excluded from the next pick.
    pub repeat_interval: usize,
}

impl SoundConfig {
    /// Create a sound configuration.
    #[must_use]
    pub const fn new(turn_clips: usize, repeat_interval: usize) -> Self {
        Self {
            turn_clips,
            repeat_interval,
        }
    }

    /// Whether a turn cue is configured.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.turn_clips > 0
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Music tempo driving the idle bob, in beats per minute.
    pub tempo_bpm: f32,

    /// Fewest distinct entities a round may be played with.
    pub min_entities: usize,

    /// Interpolation speed toward the target elevation (fraction per second).
    pub move_speed: f32,

    /// Entity heights.
    pub elevation: ElevationConfig,

    /// Turn cue variation.
    pub sounds: SoundConfig,

    /// Seed for cosmetic randomness.
    pub seed: u64,

    /// Register trace-logging subscribers on the event bus at build time.
    pub trace_events: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tempo_bpm: 120.0,
            min_entities: 2,
            move_speed: 15.0,
            elevation: ElevationConfig::default(),
            sounds: SoundConfig::default(),
            seed: 42,
            trace_events: true,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tempo.
    #[must_use]
    pub fn with_tempo(mut self, bpm: f32) -> Self {
        self.tempo_bpm = bpm;
        self
    }

    /// Set the minimum number of distinct entities.
    #[must_use]
    pub fn with_min_entities(mut self, min: usize) -> Self {
        self.min_entities = min;
        self
    }

    /// Set the interpolation speed.
    #[must_use]
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Set entity heights.
    #[must_use]
    pub fn with_elevation(mut self, elevation: ElevationConfig) -> Self {
        self.elevation = elevation;
        self
    }

    /// Set the turn cue variation.
    #[must_use]
    pub fn with_sounds(mut self, sounds: SoundConfig) -> Self {
        self.sounds = sounds;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable the trace-logging bus subscribers.
    #[must_use]
    pub fn with_trace_events(mut self, enabled: bool) -> Self {
        self.trace_events = enabled;
        self
    }

    /// Check the configuration against the number of distinct entities
    /// that will be spawned.
    ///
    /// ```
    /// use monster_echo::core::{GameConfig, SetupError};
    ///
    /// let config = GameConfig::new().with_min_entities(3);
    /// assert!(config.validate(4).is_ok());
    /// assert_eq!(
    ///     config.validate(2),
    ///     Err(SetupError::TooFewEntities { found: 2, required: 3 }),
    /// );
    /// ```
    pub fn validate(&self, entity_count: usize) -> SetupResult<()> {
        if !self.tempo_bpm.is_finite() || self.tempo_bpm <= 0.0 {
            return Err(SetupError::InvalidTempo(self.tempo_bpm));
        }
        if !self.move_speed.is_finite() || self.move_speed <= 0.0 {
            return Err(SetupError::InvalidMoveSpeed(self.move_speed));
        }
        if self.min_entities < 2 {
            return Err(SetupError::MinimumTooSmall(self.min_entities));
        }
        if entity_count < self.min_entities {
            return Err(SetupError::TooFewEntities {
                found: entity_count,
                required: self.min_entities,
            });
        }
        if self.sounds.enabled() && self.sounds.turn_clips <= self.sounds.repeat_interval {
            return Err(SetupError::RepeatIntervalTooLarge {
                clips: self.sounds.turn_clips,
                interval: self.sounds.repeat_interval,
            });
        }
        Ok(())
    }
}
