//! # monster-echo
//!
//! Core rules for a two-player "repeat-the-sequence" memory game.
//!
//! Players take turns selecting entities. Each turn the active player must
//! replay the whole shared sequence and then add one new step; the first
//! wrong selection ends the round and that player loses.
//!
//! ## Design Principles
//!
//! 1. **Explicit Wiring**: No global managers. [`GameBuilder`] constructs
//!    every component and [`Game`] owns them.
//!
//! 2. **Presentation at the Edges**: Rendering, animation, and audio
//!    playback go through the [`Presenter`] trait and event bus
//!    subscriptions. The core never inspects what they do.
//!
//! 3. **Single-Threaded and Synchronous**: Everything triggered by one input
//!    or one tick runs to completion before the next.
//!
//! ## Modules
//!
//! - `core`: Entity ids, players, RNG, configuration, setup errors
//! - `events`: Event kinds and the publish/subscribe bus
//! - `entities`: Entity lifecycle and the entity pool
//! - `input`: Pointer events, hit testing, engagement resolution
//! - `rules`: The sequence state machine
//! - `audio`: Beat clock and repeat-avoiding clip picker
//! - `present`: The presentation interface
//! - `game`: Composition root

pub mod core;
pub mod events;
pub mod entities;
pub mod input;
pub mod rules;
pub mod audio;
pub mod present;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    EntityId, InvalidPlayer, PlayerId,
    GameRng,
    ElevationConfig, GameConfig, SoundConfig,
    SetupError, SetupResult,
};

pub use crate::events::{EventBus, EventKind, GameEvent, SubscriptionId};

pub use crate::entities::{Entity, EntityPool, Lifecycle};

pub use crate::input::{HitTest, InputOutcome, InputResolver, PointerEvent, PointerPhase, ScreenPoint};

pub use crate::rules::{SelectionOutcome, SequenceMachine, TurnState};

pub use crate::audio::{BeatClock, SoundPicker};

pub use crate::present::{NullPresenter, Presenter};

pub use crate::game::{Game, GameBuilder};
