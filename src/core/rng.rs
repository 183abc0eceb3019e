//! Deterministic random number generation for the non-optimal strategies.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences per mark from one match seed
//!
//! ```
//! use ttt_engine::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut x_rng = rng.for_context("X");
//! let mut o_rng = rng.for_context("O");
//!
//! // Same context, same stream
//! let mut x_again = GameRng::new(42).for_context("X");
//! assert_eq!(x_rng.choose(&[1, 2, 3, 4]), x_again.choose(&[1, 2, 3, 4]));
//! # let _ = o_rng.choose(&[1]);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Seeded RNG backed by ChaCha8.
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

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// across toolchains: the seed and context bytes are fed to `FxHasher`
    /// directly, without `Hash`.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(Self::context_seed(self.seed, context))
    }

    fn context_seed(seed: u64, context: &str) -> u64 {
        let mut hasher = FxHasher::default();
        hasher.write_u64(seed);
        hasher.write(context.as_bytes());
        hasher.finish()
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let items: Vec<u32> = (0..100).collect();
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..50 {
            assert_eq!(rng1.choose(&items), rng2.choose(&items));
        }
    }

    #[test]
    fn test_different_seeds() {
        let items: Vec<u32> = (0..1000).collect();
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| *rng1.choose(&items).unwrap()).collect();
        let seq2: Vec<_> = (0..10).map(|_| *rng2.choose(&items).unwrap()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let items: Vec<u32> = (0..1000).collect();
        let rng = GameRng::new(42);
        let mut ctx1 = rng.for_context("X");
        let mut ctx2 = rng.for_context("O");

        let seq1: Vec<_> = (0..10).map(|_| *ctx1.choose(&items).unwrap()).collect();
        let seq2: Vec<_> = (0..10).map(|_| *ctx2.choose(&items).unwrap()).collect();

        assert_ne!(seq1, seq2);
        assert_ne!(ctx1.seed(), ctx2.seed());
    }

    #[test]
    fn test_context_seed_is_fixed_by_inputs() {
        let rng = GameRng::new(42);
        let mut expected = FxHasher::default();
        expected.write_u64(42);
        expected.write(b"X");

        assert_eq!(rng.for_context("X").seed(), expected.finish());
        assert_eq!(GameRng::new(42).for_context("X").seed(), rng.for_context("X").seed());
        assert_ne!(rng.for_context("X").seed(), GameRng::new(43).for_context("X").seed());
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
