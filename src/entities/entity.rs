//! Selectable game entities and their idle/engaged lifecycle.

use serde::{Deserialize, Serialize};

use crate::core::{ElevationConfig, EntityId};
use crate::present::Presenter;

/// Lifecycle state of an entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Lowered, bobbing to the beat.
    #[default]
    Idle,
    /// Raised with feedback running.
    Engaged,
}

/// A selectable game piece.
///
/// Positions are expressed as a target elevation; [`Entity::advance`] moves
/// the current elevation toward it over time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    id: EntityId,
    name: String,
    lifecycle: Lifecycle,
    rest: f32,
    raised: f32,
    bob_offset: f32,
    target_elevation: f32,
    elevation: f32,
}

impl Entity {
    /// Create an idle entity resting at the configured height.
    pub fn new(id: EntityId, name: impl Into<String>, elevation: &ElevationConfig) -> Self {
        Self {
            id,
            name: name.into(),
            lifecycle: Lifecycle::Idle,
            rest: elevation.rest,
            raised: elevation.raised,
            bob_offset: elevation.bob_offset,
            target_elevation: elevation.rest,
            elevation: elevation.rest,
        }
    }

    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.lifecycle == Lifecycle::Engaged
    }

    /// Height the entity is moving toward.
    #[must_use]
    pub fn target_elevation(&self) -> f32 {
        self.target_elevation
    }

    /// Current interpolated height.
    #[must_use]
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Idle → Engaged: raise and start feedback.
    ///
    /// Returns `false` without touching the presenter if already engaged.
    pub fn engage(&mut self, presenter: &mut dyn Presenter) -> bool {
        if self.is_engaged() {
            return false;
        }

        self.lifecycle = Lifecycle::Engaged;
        self.target_elevation = self.raised;
        presenter.raise(self.id);
        presenter.start_feedback(self.id);

        tracing::debug!(entity = %self.id, name = %self.name, "engaged");
        true
    }

    /// Engaged → Idle: stop feedback and lower.
    ///
    /// Returns `false` without touching the presenter if already idle.
    pub fn disengage(&mut self, presenter: &mut dyn Presenter) -> bool {
        if !self.is_engaged() {
            return false;
        }

        self.lifecycle = Lifecycle::Idle;
        self.target_elevation = self.rest;
        presenter.stop_feedback(self.id);
        presenter.lower(self.id);

        tracing::debug!(entity = %self.id, name = %self.name, "disengaged");
        true
    }

    /// React to a beat pulse. Engaged entities hold their pose.
    ///
    /// Returns whether the target moved.
    pub fn on_beat(&mut self, phase: bool) -> bool {
        if self.is_engaged() {
            return false;
        }

        self.target_elevation = if phase {
            self.rest + self.bob_offset
        } else {
            self.rest
        };
        true
    }

    /// Move toward the target by `move_speed * dt`, clamped to `[0, 1]`.
    pub fn advance(&mut self, dt: f32, move_speed: f32) {
        let t = (move_speed * dt).clamp(0.0, 1.0);
        if t.is_nan() {
            return;
        }
        self.elevation += (self.target_elevation - self.elevation) * t;
    }
}
