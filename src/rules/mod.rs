//! Game rules.
//!
//! [`SequenceMachine`] is the only place the sequence and turn state are
//! mutated. Callers feed it validated selections; it reports what happened
//! through the event bus, the presenter, and a returned [`SelectionOutcome`].

pub mod machine;

pub use machine::{SelectionOutcome, SequenceMachine, TurnState};
