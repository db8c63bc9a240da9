//! Presentation interface.
//!
//! The game core never draws, animates, or plays sound itself. Every visible
//! or audible side effect goes through a [`Presenter`], which the host
//! implements on top of whatever engine it renders with. Return values are
//! never inspected, so a presenter cannot influence game state.

use crate::core::{EntityId, PlayerId};

/// Sink for presentation side effects.
pub trait Presenter {
    /// Move an entity to its raised pose.
    fn raise(&mut self, entity: EntityId);

    /// Move an entity back to its resting pose.
    fn lower(&mut self, entity: EntityId);

    /// Start the entity's engaged feedback (sound, particles).
    fn start_feedback(&mut self, entity: EntityId);

    /// Stop the entity's engaged feedback.
    fn stop_feedback(&mut self, entity: EntityId);

    /// Create the marker for the sequence step at `index`.
    fn add_indicator(&mut self, index: usize);

    /// Highlight the marker for step `index`.
    fn set_indicator_active(&mut self, index: usize);

    /// Remove the highlight from step `index`.
    fn set_indicator_inactive(&mut self, index: usize);

    /// Remove every marker.
    fn clear_indicators(&mut self);

    /// Show whatever UI accompanies the first step of a round.
    fn show_round_start_ui(&mut self);

    /// Show the end-of-round result for the losing player.
    fn show_result(&mut self, loser: PlayerId);

    /// Play one variation of the turn-passed cue.
    fn play_clip(&mut self, _clip: usize) {}
}

/// Presenter that ignores every call.
///
/// Useful for headless simulation and benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn raise(&mut self, _entity: EntityId) {}
    fn lower(&mut self, _entity: EntityId) {}
    fn start_feedback(&mut self, _entity: EntityId) {}
    fn stop_feedback(&mut self, _entity: EntityId) {}
    fn add_indicator(&mut self, _index: usize) {}
    fn set_indicator_active(&mut self, _index: usize) {}
    fn set_indicator_inactive(&mut self, _index: usize) {}
    fn clear_indicators(&mut self) {}
    fn show_round_start_ui(&mut self) {}
    fn show_result(&mut self, _loser: PlayerId) {}
}
