//! Setup errors.
//!
//! Only construction can fail. Once a [`Game`](crate::game::Game) is built,
//! bad input is logged and ignored rather than returned.

use super::EntityId;

/// Errors that prevent a game from being set up.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetupError {
    /// Not enough distinct entities to build a meaningful sequence.
    #[error("entity pool has {found} distinct entities, at least {required} required")]
    TooFewEntities { found: usize, required: usize },

    /// Two entities were registered with the same id.
    #[error("entity {0} registered more than once")]
    DuplicateEntity(EntityId),

    /// Tempo must be a positive, finite number of beats per minute.
    #[error("invalid tempo: {0} bpm")]
    InvalidTempo(f32),

    /// Interpolation speed must be positive and finite.
    #[error("invalid move speed: {0}")]
    InvalidMoveSpeed(f32),

    /// A sound collection needs more clips than it remembers.
    #[error("number of clips ({clips}) must exceed the repeat interval ({interval})")]
    RepeatIntervalTooLarge { clips: usize, interval: usize },

    /// The configured entity minimum is itself degenerate.
    #[error("minimum entity count must be at least 2, got {0}")]
    MinimumTooSmall(usize),
}

/// Result type alias for setup operations.
pub type SetupResult<T> = Result<T, SetupError>;
