//! Composition root.
//!
//! [`GameBuilder`] constructs the event bus, entity pool, input resolver,
//! sequence machine, beat clock, and sound picker, then hands them to a
//! [`Game`] that owns them all. The host supplies two collaborators: a
//! [`Presenter`](crate::present::Presenter) for side effects and a
//! [`HitTest`](crate::input::HitTest) for mapping screen positions to
//! entities.
//!
//! Per frame the host calls [`Game::tick`]; per pointer transition it calls
//! [`Game::pointer`].

mod session;

pub use session::{Game, GameBuilder};
