//! Game entities.
//!
//! - [`Entity`]: A selectable piece with an idle/engaged lifecycle
//! - [`EntityPool`]: Owns entities and their beat subscriptions

mod entity;
mod pool;

pub use entity::{Entity, Lifecycle};
pub use pool::EntityPool;
