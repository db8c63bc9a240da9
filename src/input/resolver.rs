//! Input resolution.
//!
//! Turns pointer activity into engage/disengage calls and forwards each new
//! engagement to the [`SequenceMachine`]. At most one entity is engaged at a
//! time. Pressing a different entity switches to it without a release: the
//! old entity is fully disengaged before the new one is engaged.

use serde::{Deserialize, Serialize};

use crate::core::EntityId;
use crate::entities::EntityPool;
use crate::events::{EventBus, GameEvent};
use crate::present::Presenter;
use crate::rules::{SelectionOutcome, SequenceMachine};

use super::pointer::{HitTest, PointerEvent, PointerPhase};

/// Everything a press or release touches.
pub struct InputContext<'a> {
    pub pool: &'a EntityPool,
    pub bus: &'a mut EventBus,
    pub machine: &'a mut SequenceMachine,
    pub presenter: &'a mut dyn Presenter,
}

/// Result of handling one input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputOutcome {
    /// A new entity was engaged and forwarded to the machine.
    Selected {
        entity: EntityId,
        selection: SelectionOutcome,
    },

    /// The pressed entity was already engaged.
    AlreadyEngaged(EntityId),

    /// The engaged entity was released.
    Released(EntityId),

    /// The press hit no entity.
    Missed,

    /// Nothing to do: release with nothing engaged, or an unknown entity.
    Ignored,
}

/// Tracks the engaged entity.
#[derive(Clone, Debug, Default)]
pub struct InputResolver {
    engaged: Option<EntityId>,
}

impl InputResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently engaged entity, if any.
    #[must_use]
    pub fn engaged(&self) -> Option<EntityId> {
        self.engaged
    }

    /// Hit-test and dispatch a raw pointer event.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        hit_test: &dyn HitTest,
        ctx: InputContext<'_>,
    ) -> InputOutcome {
        match event.phase {
            PointerPhase::Down => match hit_test.resolve(event.position) {
                Some(target) => self.press(target, ctx),
                None => {
                    tracing::trace!(x = event.position.x, y = event.position.y, "press missed");
                    InputOutcome::Missed
                }
            },
            PointerPhase::Up => self.release(ctx.pool, ctx.presenter),
        }
    }

    /// Press on an already resolved entity.
    pub fn press(&mut self, target: EntityId, ctx: InputContext<'_>) -> InputOutcome {
        if !ctx.pool.contains(target) {
            tracing::warn!(entity = %target, "press on unknown entity ignored");
            return InputOutcome::Ignored;
        }
        if self.engaged == Some(target) {
            return InputOutcome::AlreadyEngaged(target);
        }

        if let Some(previous) = self.engaged.take() {
            ctx.pool.disengage(previous, ctx.presenter);
        }

        ctx.pool.engage(target, ctx.presenter);
        self.engaged = Some(target);

        ctx.bus.publish(&GameEvent::EntitySelected(target));
        let selection = ctx.machine.add_selection(target, ctx.bus, ctx.presenter);

        InputOutcome::Selected {
            entity: target,
            selection,
        }
    }

    /// Release the engaged entity. A no-op when nothing is engaged.
    pub fn release(&mut self, pool: &EntityPool, presenter: &mut dyn Presenter) -> InputOutcome {
        match self.engaged.take() {
            Some(entity) => {
                pool.disengage(entity, presenter);
                InputOutcome::Released(entity)
            }
            None => InputOutcome::Ignored,
        }
    }
}
