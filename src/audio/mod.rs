//! Timing and sound selection.
//!
//! Nothing here plays audio. [`BeatClock`] decides when the music beat ticks
//! and [`SoundPicker`] decides which variation of a cue to request; playback
//! is the presenter's job.

mod beat;
mod picker;

pub use beat::BeatClock;
pub use picker::SoundPicker;
