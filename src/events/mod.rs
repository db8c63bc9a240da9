//! Event system decoupling state changes from presentation.
//!
//! ## Key Components
//!
//! - [`EventKind`]: The key subscribers register under
//! - [`GameEvent`]: An event with its payload
//! - [`EventBus`]: Synchronous publish/subscribe registry
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use monster_echo::core::PlayerId;
//! use monster_echo::events::{EventBus, EventKind, GameEvent};
//!
//! let mut bus = EventBus::new();
//! let losers = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&losers);
//! bus.subscribe(EventKind::GameOver, move |event| {
//!     if let Some(player) = event.player() {
//!         sink.borrow_mut().push(player);
//!     }
//! });
//!
//! bus.publish(&GameEvent::GameOver(PlayerId::TWO));
//! assert_eq!(*losers.borrow(), vec![PlayerId::TWO]);
//! ```

mod bus;
mod event;

pub use bus::{EventBus, Handler, SubscriptionId};
pub use event::{EventKind, GameEvent};

/// Register one logging subscriber per event kind.
///
/// Beats log at `trace` level since they fire continuously; everything else
/// logs at `debug`.
pub fn trace_events(bus: &mut EventBus) -> Vec<SubscriptionId> {
    EventKind::ALL
        .iter()
        .map(|&kind| {
            bus.subscribe(kind, |event| match event {
                GameEvent::EntitySelected(entity) => {
                    tracing::debug!(%entity, "entity selected");
                }
                GameEvent::TurnPassed(player) => {
                    tracing::debug!(%player, "sequence completed, turn passed");
                }
                GameEvent::GameOver(player) => {
                    tracing::debug!(%player, "player failed the sequence");
                }
                GameEvent::BeatPulse(phase) => {
                    tracing::trace!(phase, "beat");
                }
            })
        })
        .collect()
}
