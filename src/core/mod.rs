//! Core types: entity ids, players, RNG, configuration, setup errors.
//!
//! Everything here is plain data with no knowledge of the event bus or the
//! presentation layer.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::EntityId;
pub use player::{InvalidPlayer, PlayerId};
pub use rng::GameRng;
pub use config::{ElevationConfig, GameConfig, SoundConfig};
pub use error::{SetupError, SetupResult};
