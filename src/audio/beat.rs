//! Beat scheduling.
//!
//! The clock accumulates elapsed time and reports an alternating phase each
//! time a beat deadline passes. Idle entities use the phase to bob.

use crate::core::{SetupError, SetupResult};

/// Fires an alternating beat at a fixed tempo.
#[derive(Clone, Debug, PartialEq)]
pub struct BeatClock {
    period: f64,
    next_beat: f64,
    phase: bool,
    now: f64,
}

impl BeatClock {
    /// Create a clock for `bpm` beats per minute.
    pub fn new(bpm: f32) -> SetupResult<Self> {
        if !bpm.is_finite() || bpm <= 0.0 {
            return Err(SetupError::InvalidTempo(bpm));
        }

        Ok(Self {
            period: 60.0 / f64::from(bpm),
            next_beat: 0.0,
            phase: false,
            now: 0.0,
        })
    }

    /// Seconds between beats.
    #[must_use]
    pub fn period_secs(&self) -> f64 {
        self.period
    }

    /// Accumulated time in seconds.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Phase of the most recent beat.
    #[must_use]
    pub fn phase(&self) -> bool {
        self.phase
    }

    /// Add `dt` seconds and check for a beat.
    ///
    /// Negative or non-finite steps are treated as zero.
    pub fn advance(&mut self, dt: f32) -> Option<bool> {
        let dt = if dt.is_finite() { f64::from(dt.max(0.0)) } else { 0.0 };
        self.tick_at(self.now + dt)
    }

    /// Check for a beat at absolute time `now`.
    ///
    /// At most one beat fires per call. The next beat is scheduled one period
    /// after `now`, so a long frame delays the rhythm rather than bursting.
    ///
    /// ```
    /// use monster_echo::audio::BeatClock;
    ///
    /// let mut clock = BeatClock::new(120.0).unwrap();
    /// assert_eq!(clock.tick_at(0.01), Some(true));
    /// assert_eq!(clock.tick_at(0.2), None);
    /// assert_eq!(clock.tick_at(0.52), Some(false));
    /// ```
    pub fn tick_at(&mut self, now: f64) -> Option<bool> {
        self.now = self.now.max(now);
        if self.now <= self.next_beat {
            return None;
        }

        self.phase = !self.phase;
        self.next_beat = self.now + self.period;
        Some(self.phase)
    }

    /// Back to time zero with the phase cleared.
    pub fn reset(&mut self) {
        self.next_beat = 0.0;
        self.phase = false;
        self.now = 0.0;
    }
}
