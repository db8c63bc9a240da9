//! Game event types.
//!
//! Events describe state changes that presentation code may react to. The
//! bus routes each event by its [`EventKind`]; the payload travels with the
//! [`GameEvent`] itself.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, PlayerId};

/// Event kind, the key subscribers register under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// An entity was engaged by a pointer press.
    EntitySelected,
    /// A new step was appended and the other player is up.
    TurnPassed,
    /// A replay attempt failed and the round ended.
    GameOver,
    /// The music beat ticked over.
    BeatPulse,
}

impl EventKind {
    /// Every event kind, in declaration order.
    pub const ALL: [EventKind; 4] = [
        EventKind::EntitySelected,
        EventKind::TurnPassed,
        EventKind::GameOver,
        EventKind::BeatPulse,
    ];
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EntitySelected => write!(f, "EntitySelected"),
            Self::TurnPassed => write!(f, "TurnPassed"),
            Self::GameOver => write!(f, "GameOver"),
            Self::BeatPulse => write!(f, "BeatPulse"),
        }
    }
}

/// A published event with its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The entity that was just engaged.
    EntitySelected(EntityId),

    /// The player whose turn it now is.
    TurnPassed(PlayerId),

    /// The player whose replay attempt failed.
    GameOver(PlayerId),

    /// Alternating beat phase.
    BeatPulse(bool),
}

impl GameEvent {
    /// The kind this event is routed under.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::EntitySelected(_) => EventKind::EntitySelected,
            Self::TurnPassed(_) => EventKind::TurnPassed,
            Self::GameOver(_) => EventKind::GameOver,
            Self::BeatPulse(_) => EventKind::BeatPulse,
        }
    }

    /// The selected entity, for `EntitySelected` events.
    #[must_use]
    pub const fn entity(&self) -> Option<EntityId> {
        match self {
            Self::EntitySelected(entity) => Some(*entity),
            _ => None,
        }
    }

    /// The player carried by `TurnPassed` and `GameOver` events.
    #[must_use]
    pub const fn player(&self) -> Option<PlayerId> {
        match self {
            Self::TurnPassed(player) | Self::GameOver(player) => Some(*player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(GameEvent::EntitySelected(EntityId(1)).kind(), EventKind::EntitySelected);
        assert_eq!(GameEvent::TurnPassed(PlayerId::TWO).kind(), EventKind::TurnPassed);
        assert_eq!(GameEvent::GameOver(PlayerId::ONE).kind(), EventKind::GameOver);
        assert_eq!(GameEvent::BeatPulse(true).kind(), EventKind::BeatPulse);
    }

    #[test]
    fn test_payload_accessors() {
        assert_eq!(GameEvent::EntitySelected(EntityId(5)).entity(), Some(EntityId(5)));
        assert_eq!(GameEvent::BeatPulse(false).entity(), None);
        assert_eq!(GameEvent::GameOver(PlayerId::TWO).player(), Some(PlayerId::TWO));
        assert_eq!(GameEvent::TurnPassed(PlayerId::ONE).player(), Some(PlayerId::ONE));
        assert_eq!(GameEvent::BeatPulse(true).player(), None);
    }

    #[test]
    fn test_all_kinds_distinct() {
        for (i, a) in EventKind::ALL.iter().enumerate() {
            for b in &EventKind::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(format!("{}", EventKind::BeatPulse), "BeatPulse");
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::GameOver(PlayerId::TWO);
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
