//! Pointer events and hit testing.

use serde::{Deserialize, Serialize};

use crate::core::EntityId;

/// A position in screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Up,
}

/// One pointer or touch transition. Mouse and touch input both reduce to this.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: ScreenPoint,
}

impl PointerEvent {
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self {
            phase: PointerPhase::Down,
            position: ScreenPoint::new(x, y),
        }
    }

    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self {
            phase: PointerPhase::Up,
            position: ScreenPoint::new(x, y),
        }
    }
}

/// Maps a screen position to the entity under it.
///
/// Any `Fn(ScreenPoint) -> Option<EntityId>` closure is a hit tester.
pub trait HitTest {
    fn resolve(&self, point: ScreenPoint) -> Option<EntityId>;
}

impl<F> HitTest for F
where
    F: Fn(ScreenPoint) -> Option<EntityId>,
{
    fn resolve(&self, point: ScreenPoint) -> Option<EntityId> {
        self(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_hit_test() {
        let columns = |p: ScreenPoint| (p.x >= 0.0 && p.x < 3.0).then(|| EntityId(p.x as u32));

        assert_eq!(columns.resolve(ScreenPoint::new(1.5, 0.0)), Some(EntityId(1)));
        assert_eq!(columns.resolve(ScreenPoint::new(7.0, 0.0)), None);
    }

    #[test]
    fn test_constructors() {
        let down = PointerEvent::down(1.0, 2.0);
        assert_eq!(down.phase, PointerPhase::Down);
        assert_eq!(down.position, ScreenPoint::new(1.0, 2.0));
        assert_eq!(PointerEvent::up(0.0, 0.0).phase, PointerPhase::Up);
    }
}
