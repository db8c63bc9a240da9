//! Entity ownership and beat wiring.
//!
//! Each spawned entity gets one `BeatPulse` subscription. The handler holds a
//! weak reference, and despawning removes the subscription from the bus, so a
//! torn-down entity never receives another beat.
//!
//! Entities are only changed through the game. Lookups hand out a shared
//! borrow tied to the pool, so no borrow can outlive a frame:
//!
//! ```compile_fail
//! use monster_echo::core::EntityId;
//! use monster_echo::entities::EntityPool;
//! use monster_echo::present::NullPresenter;
//!
//! let pool = EntityPool::new();
//! pool.engage(EntityId(1), &mut NullPresenter);
//! ```

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;

use crate::core::{EntityId, SetupError, SetupResult};
use crate::events::{EventBus, EventKind, GameEvent, SubscriptionId};
use crate::present::Presenter;

use super::entity::{Entity, Lifecycle};

/// Entity cell shared between the pool and its beat handler.
type SharedEntity = Rc<RefCell<Entity>>;

#[derive(Debug)]
struct Slot {
    entity: SharedEntity,
    beat: SubscriptionId,
}

/// Owns every live entity, in spawn order.
#[derive(Debug, Default)]
pub struct EntityPool {
    slots: FxHashMap<EntityId, Slot>,
    order: Vec<EntityId>,
}

impl EntityPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of an entity and subscribe it to beats.
    ///
    /// Fails if an entity with the same id is already live.
    pub fn spawn(&mut self, entity: Entity, bus: &mut EventBus) -> SetupResult<EntityId> {
        let id = entity.id();
        if self.slots.contains_key(&id) {
            return Err(SetupError::DuplicateEntity(id));
        }

        let entity = Rc::new(RefCell::new(entity));
        let beat = bus.subscribe(EventKind::BeatPulse, beat_handler(Rc::downgrade(&entity)));

        self.slots.insert(id, Slot { entity, beat });
        self.order.push(id);

        tracing::debug!(entity = %id, subscription = %beat, "spawned");
        Ok(id)
    }

    /// Unsubscribe and drop an entity. Returns `false` if it was not live.
    pub fn despawn(&mut self, id: EntityId, bus: &mut EventBus) -> bool {
        let Some(slot) = self.slots.remove(&id) else {
            return false;
        };
        self.order.retain(|other| *other != id);
        bus.unsubscribe(slot.beat);

        tracing::debug!(entity = %id, "despawned");
        true
    }

    /// Despawn every entity.
    pub fn clear(&mut self, bus: &mut EventBus) {
        for id in std::mem::take(&mut self.order) {
            if let Some(slot) = self.slots.remove(&id) {
                bus.unsubscribe(slot.beat);
            }
        }
    }

    /// Borrow a live entity for reading.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<Ref<'_, Entity>> {
        self.slots.get(&id).map(|slot| slot.entity.borrow())
    }

    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Live entity ids in spawn order.
    #[must_use]
    pub fn ids(&self) -> &[EntityId] {
        &self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Lifecycle of a live entity.
    #[must_use]
    pub fn lifecycle(&self, id: EntityId) -> Option<Lifecycle> {
        self.get(id).map(|entity| entity.lifecycle())
    }

    /// Number of entities currently engaged.
    #[must_use]
    pub fn engaged_count(&self) -> usize {
        self.slots
            .values()
            .filter(|slot| slot.entity.borrow().is_engaged())
            .count()
    }

    /// Engage an entity. Returns `false` if unknown or already engaged.
    ///
    /// Only the input resolver engages, so at most one entity is engaged.
    pub(crate) fn engage(&self, id: EntityId, presenter: &mut dyn Presenter) -> bool {
        self.slots
            .get(&id)
            .is_some_and(|slot| slot.entity.borrow_mut().engage(presenter))
    }

    /// Disengage an entity. Returns `false` if unknown or already idle.
    pub(crate) fn disengage(&self, id: EntityId, presenter: &mut dyn Presenter) -> bool {
        self.slots
            .get(&id)
            .is_some_and(|slot| slot.entity.borrow_mut().disengage(presenter))
    }

    /// Advance every entity's interpolation by one frame.
    pub fn advance_all(&self, dt: f32, move_speed: f32) {
        for id in &self.order {
            let Some(slot) = self.slots.get(id) else {
                continue;
            };
            if let Ok(mut entity) = slot.entity.try_borrow_mut() {
                entity.advance(dt, move_speed);
            } else {
                tracing::warn!(entity = %id, "entity busy during frame advance, skipping");
            }
        }
    }
}

fn beat_handler(entity: Weak<RefCell<Entity>>) -> impl FnMut(&GameEvent) + 'static {
    move |event| {
        let GameEvent::BeatPulse(phase) = *event else {
            return;
        };
        let Some(entity) = entity.upgrade() else {
            return;
        };
        if let Ok(mut entity) = entity.try_borrow_mut() {
            entity.on_beat(phase);
        } else {
            tracing::warn!("entity busy during beat pulse, skipping");
        };
    }
}
