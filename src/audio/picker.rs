//! Repeat-avoiding clip selection.

use std::collections::VecDeque;

use crate::core::{GameRng, SetupError, SetupResult};

/// Picks clip indices at random, never repeating one of the last
/// `repeat_interval` picks.
#[derive(Clone, Debug)]
pub struct SoundPicker {
    clip_count: usize,
    repeat_interval: usize,
    recent: VecDeque<usize>,
}

impl SoundPicker {
    /// Requires more clips than the interval, otherwise no clip would ever
    /// be eligible once the history fills up.
    pub fn new(clip_count: usize, repeat_interval: usize) -> SetupResult<Self> {
        if clip_count <= repeat_interval {
            return Err(SetupError::RepeatIntervalTooLarge {
                clips: clip_count,
                interval: repeat_interval,
            });
        }

        Ok(Self {
            clip_count,
            repeat_interval,
            recent: VecDeque::with_capacity(repeat_interval + 1),
        })
    }

    /// Choose the next clip index.
    ///
    /// ```
    /// use monster_echo::audio::SoundPicker;
    /// use monster_echo::core::GameRng;
    ///
    /// let mut picker = SoundPicker::new(3, 2).unwrap();
    /// let mut rng = GameRng::new(7);
    ///
    /// let a = picker.pick(&mut rng);
    /// let b = picker.pick(&mut rng);
    /// let c = picker.pick(&mut rng);
    /// assert!(a != b && b != c && a != c);
    /// ```
    pub fn pick(&mut self, rng: &mut GameRng) -> usize {
        let candidates: Vec<usize> = (0..self.clip_count)
            .filter(|clip| !self.recent.contains(clip))
            .collect();

        // Never empty: at most `repeat_interval` clips are excluded
        let clip = rng.choose(&candidates).copied().unwrap_or(0);

        self.recent.push_back(clip);
        if self.recent.len() > self.repeat_interval {
            self.recent.pop_front();
        }

        tracing::trace!(clip, recent = ?self.recent, "picked clip");
        clip
    }

    #[must_use]
    pub fn clip_count(&self) -> usize {
        self.clip_count
    }

    /// Recently picked clips, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = usize> + '_ {
        self.recent.iter().copied()
    }

    /// Forget the pick history.
    pub fn reset(&mut self) {
        self.recent.clear();
    }
}
