//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for different purposes
//!
//! The only randomness in the game is cosmetic (which sound variation plays),
//! but it is still seeded so that recorded sessions replay identically.
//! Context seeds are derived with 64-bit FNV-1a, which does not depend on the
//! toolchain.
//!
//! ```
//! use monster_echo::core::GameRng;
//!
//! let clips = [0, 1, 2, 3];
//! let rng = GameRng::new(42);
//! let mut cues = rng.for_context("turn-cue");
//! let mut cues_again = GameRng::new(42).for_context("turn-cue");
//!
//! assert_eq!(cues.choose(&clips), cues_again.choose(&clips));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// on every platform and toolchain.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let bytes = self.seed.to_le_bytes().into_iter().chain(context.bytes());
        let seed = bytes.fold(FNV_OFFSET, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        });
        Self::new(seed)
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut GameRng) -> Vec<u32> {
        let items: Vec<u32> = (0..1000).collect();
        (0..20).map(|_| *rng.choose(&items).unwrap()).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(draws(&mut rng1), draws(&mut rng2));
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(draws(&mut GameRng::new(1)), draws(&mut GameRng::new(2)));
    }

    #[test]
    fn test_context_streams_differ() {
        let rng = GameRng::new(42);
        let mut ctx1 = rng.for_context("turn-cue");
        let mut ctx2 = rng.for_context("game-over");

        assert_ne!(draws(&mut ctx1), draws(&mut ctx2));
    }

    #[test]
    fn test_context_seed_is_pinned() {
        // Changing these breaks replay of recorded sessions
        assert_eq!(GameRng::new(42).for_context("turn-cue").seed(), 0xaa49_055e_c453_282e);
        assert_eq!(GameRng::new(42).for_context("game-over").seed(), 0xe267_1757_bef7_9812);
        assert_eq!(GameRng::new(0).for_context("").seed(), 0xa8c7_f832_281a_39c5);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }
}
