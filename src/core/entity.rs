//! Entity identification.
//!
//! Every selectable game piece has a unique `EntityId`. Ids are assigned by
//! whoever sets up the scene and stay stable for the entity's lifetime; the
//! sequence machine compares selections by id only.
//!
//! ## Usage
//!
//! ```
//! use monster_echo::core::EntityId;
//!
//! let frog = EntityId::new(3);
//! assert_eq!(frog.raw(), 3);
//! assert_eq!(frog, EntityId(3));
//! assert_eq!(format!("{}", frog), "Entity(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a selectable game piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create a new entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
