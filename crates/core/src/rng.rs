//! RNG module - injectable entropy for scramble generation
//!
//! Scrambles draw every random pick through the [`RandomSource`] trait so
//! callers decide where entropy comes from. [`SimpleRng`] is a small seeded
//! LCG: the same seed always produces the same scramble, which is what tests
//! and replayable practice sessions need.

use std::time::{SystemTime, UNIX_EPOCH};

/// A stream of uniformly distributed picks
pub trait RandomSource {
    /// Next raw 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, n)`
    ///
    /// `n` must be non-zero.
    fn next_below(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_below(&mut self, n: u32) -> u32 {
        (**self).next_below(n)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the wall clock, for interactive use
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    /// Current state; feeding it back into [`SimpleRng::new`] resumes the stream
    pub fn seed(&self) -> u32 {
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Maps through the high bits: the low bits of a power-of-two LCG have
    /// very short periods (bit 0 simply alternates).
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl RandomSource for SimpleRng {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    fn next_below(&mut self, n: u32) -> u32 {
        self.next_range(n)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Seed derived from the current time (nanosecond resolution)
pub fn entropy_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    // Fold the 128-bit timestamp so both fast- and slow-moving bits contribute.
    let folded = (nanos as u64) ^ ((nanos >> 64) as u64);
    ((folded >> 32) as u32) ^ (folded as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for n in 1..=18 {
            for _ in 0..200 {
                assert!(rng.next_below(n) < n);
            }
        }
    }

    #[test]
    fn test_next_below_covers_every_bucket() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [0u32; 6];
        for _ in 0..600 {
            seen[rng.next_below(6) as usize] += 1;
        }
        // Loose bound: each bucket should be near 100.
        for (i, count) in seen.iter().enumerate() {
            assert!(*count > 50, "bucket {i} drawn only {count} times");
        }
    }

    #[test]
    fn test_parity_does_not_alternate() {
        let mut rng = SimpleRng::new(3);
        let picks: Vec<u32> = (0..64).map(|_| rng.next_below(2)).collect();
        let alternating = picks.windows(2).all(|w| w[0] != w[1]);
        assert!(!alternating);
    }

    #[test]
    fn test_seed_resumes_stream() {
        let mut rng = SimpleRng::new(42);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.seed());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn draw<R: RandomSource>(mut source: R) -> u32 {
            source.next_below(6)
        }

        let mut rng = SimpleRng::new(5);
        let mut copy = rng.clone();
        assert_eq!(draw(&mut rng), copy.next_below(6));
        assert_eq!(rng.seed(), copy.seed());
    }
}
