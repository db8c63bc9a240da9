//! Event bus.
//!
//! The bus stores subscribers and dispatches published events to the ones
//! registered for the event's kind. Dispatch is synchronous: `publish`
//! returns only after every handler has run, in the order the handlers were
//! registered.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::event::{EventKind, GameEvent};

/// Unique identifier for a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl SubscriptionId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

/// A subscriber callback.
pub type Handler = Box<dyn FnMut(&GameEvent)>;

struct Subscription {
    kind: EventKind,
    handler: Handler,
}

/// Publish/subscribe registry keyed by [`EventKind`].
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use monster_echo::core::PlayerId;
/// use monster_echo::events::{EventBus, EventKind, GameEvent};
///
/// let mut bus = EventBus::new();
/// let turns = Rc::new(Cell::new(0));
///
/// let counter = Rc::clone(&turns);
/// let id = bus.subscribe(EventKind::TurnPassed, move |_| counter.set(counter.get() + 1));
///
/// assert_eq!(bus.publish(&GameEvent::TurnPassed(PlayerId::TWO)), 1);
/// assert_eq!(bus.publish(&GameEvent::BeatPulse(true)), 0);
/// assert_eq!(turns.get(), 1);
///
/// assert!(bus.unsubscribe(id));
/// bus.publish(&GameEvent::TurnPassed(PlayerId::ONE));
/// assert_eq!(turns.get(), 1);
/// ```
#[derive(Default)]
pub struct EventBus {
    /// All live subscriptions.
    subscriptions: FxHashMap<SubscriptionId, Subscription>,

    /// Subscription ids per kind, in registration order.
    by_kind: FxHashMap<EventKind, SmallVec<[SubscriptionId; 8]>>,

    /// Next subscription ID to allocate.
    next_id: u32,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<_> = EventKind::ALL
            .iter()
            .map(|kind| (*kind, self.subscriber_count(*kind)))
            .collect();
        counts.retain(|(_, count)| *count > 0);

        f.debug_struct("EventBus")
            .field("subscribers", &counts)
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl EventBus {
    /// Create a new empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one event kind.
    ///
    /// Handlers for the same kind run in the order they were subscribed.
    pub fn subscribe(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&GameEvent) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        self.by_kind.entry(kind).or_default().push(id);
        self.subscriptions.insert(
            id,
            Subscription {
                kind,
                handler: Box::new(handler),
            },
        );

        tracing::trace!(%id, %kind, "subscribed");
        id
    }

    /// Remove a subscription.
    ///
    /// Returns `false` if the id is unknown (already removed or never issued).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(subscription) = self.subscriptions.remove(&id) else {
            return false;
        };

        if let Some(list) = self.by_kind.get_mut(&subscription.kind) {
            list.retain(|sid| *sid != id);
            if list.is_empty() {
                self.by_kind.remove(&subscription.kind);
            }
        }

        tracing::trace!(%id, kind = %subscription.kind, "unsubscribed");
        true
    }

    /// Deliver an event to every handler registered for its kind.
    ///
    /// Returns how many handlers ran. Publishing with no subscribers is a
    /// no-op.
    pub fn publish(&mut self, event: &GameEvent) -> usize {
        let Some(ids) = self.by_kind.get(&event.kind()) else {
            return 0;
        };

        let mut delivered = 0;
        for id in ids {
            if let Some(subscription) = self.subscriptions.get_mut(id) {
                (subscription.handler)(event);
                delivered += 1;
            }
        }
        delivered
    }

    /// Number of handlers registered for a kind.
    #[must_use]
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.by_kind.get(&kind).map_or(0, SmallVec::len)
    }

    /// Check whether a subscription is still registered.
    #[must_use]
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscriptions.contains_key(&id)
    }

    /// Total subscription count across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Check if the bus has no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Drop every subscription. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.subscriptions.clear();
        self.by_kind.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::{EntityId, PlayerId};

    fn recorder(bus: &mut EventBus, kind: EventKind, tag: &'static str) -> (SubscriptionId, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let id = bus.subscribe(kind, move |event| {
            sink.borrow_mut().push(format!("{tag}:{event:?}"));
        });
        (id, log)
    }

    #[test]
    fn test_publish_without_subscribers_is_noop() {
        let mut bus = EventBus::new();
        assert_eq!(bus.publish(&GameEvent::BeatPulse(true)), 0);
        assert!(bus.is_empty());
    }

    #[test]
    fn test_registration_order() {
        let mut bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let sink = Rc::clone(&order);
            bus.subscribe(EventKind::TurnPassed, move |_| sink.borrow_mut().push(tag));
        }

        bus.publish(&GameEvent::TurnPassed(PlayerId::TWO));
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_routes_by_kind() {
        let mut bus = EventBus::new();
        let (_, selected) = recorder(&mut bus, EventKind::EntitySelected, "sel");
        let (_, over) = recorder(&mut bus, EventKind::GameOver, "over");

        bus.publish(&GameEvent::EntitySelected(EntityId(3)));

        assert_eq!(selected.borrow().len(), 1);
        assert!(over.borrow().is_empty());
    }

    #[test]
    fn test_unsubscribe() {
        let mut bus = EventBus::new();
        let (id, log) = recorder(&mut bus, EventKind::BeatPulse, "beat");

        assert_eq!(bus.subscriber_count(EventKind::BeatPulse), 1);
        assert!(bus.unsubscribe(id));
        assert!(!bus.is_subscribed(id));
        assert_eq!(bus.subscriber_count(EventKind::BeatPulse), 0);

        bus.publish(&GameEvent::BeatPulse(true));
        assert!(log.borrow().is_empty());

        // Second removal is reported, not an error
        assert!(!bus.unsubscribe(id));
    }

    #[test]
    fn test_unsubscribe_keeps_order_of_rest() {
        let mut bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let mut ids = Vec::new();
        for tag in ["a", "b", "c"] {
            let sink = Rc::clone(&order);
            ids.push(bus.subscribe(EventKind::GameOver, move |_| sink.borrow_mut().push(tag)));
        }
        bus.unsubscribe(ids[1]);

        bus.publish(&GameEvent::GameOver(PlayerId::ONE));
        assert_eq!(*order.borrow(), vec!["a", "c"]);
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut bus = EventBus::new();
        let first = bus.subscribe(EventKind::BeatPulse, |_| {});
        bus.clear();
        let second = bus.subscribe(EventKind::BeatPulse, |_| {});

        assert_ne!(first, second);
        assert_eq!(bus.len(), 1);
    }

    #[test]
    fn test_debug_lists_counts() {
        let mut bus = EventBus::new();
        bus.subscribe(EventKind::BeatPulse, |_| {});
        let debug = format!("{bus:?}");
        assert!(debug.contains("BeatPulse"));
    }
}
