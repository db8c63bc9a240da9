//! Pointer input.
//!
//! - [`PointerEvent`] and [`HitTest`]: raw input and the host's hit tester
//! - [`InputResolver`]: engagement bookkeeping and selection forwarding

mod pointer;
mod resolver;

pub use pointer::{HitTest, PointerEvent, PointerPhase, ScreenPoint};
pub use resolver::{InputContext, InputOutcome, InputResolver};
