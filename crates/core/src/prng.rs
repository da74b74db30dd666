//! Randomness for the sprite pipeline.
//!
//! Every render pass draws from a [`RandomSource`] handed to it explicitly, so a
//! run can be replayed by seeding the source. [`Xorshift64`] is the provided
//! implementation: same seed, same sequence, on every platform (pure integer
//! arithmetic in the core algorithm).

use serde::{Deserialize, Serialize};

/// A source of uniformly distributed random values.
///
/// Only [`next_u64`](RandomSource::next_u64) is required; the derived helpers
/// are built on it. The trait is object-safe so passes can take
/// `&mut dyn RandomSource`.
pub trait RandomSource {
    /// Returns the next raw 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Returns a uniformly distributed f64 in [0, 1).
    ///
    /// Uses the upper 53 bits of `next_u64()` divided by 2^53 for
    /// full mantissa precision.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniformly distributed f64 in [min, max).
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns a uniformly distributed f64 in [min, max] (both ends reachable).
    ///
    /// Divides the upper 53 bits by 2^53 - 1 instead of 2^53, so an all-ones
    /// draw lands exactly on `max`.
    fn next_range_inclusive(&mut self, min: f64, max: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / ((1u64 << 53) - 1) as f64;
        min * (1.0 - unit) + max * unit
    }

    /// Returns a uniformly distributed integer in [min, max] (both inclusive).
    ///
    /// Uses modulo reduction; the bias is negligible for the small spans the
    /// passes use. Returns `min` if `max < min`. The full `i64` range takes the
    /// raw 64-bit draw.
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let offset = match max.abs_diff(min).checked_add(1) {
            Some(span) => self.next_u64() % span,
            None => self.next_u64(),
        };
        min.wrapping_add_unsigned(offset)
    }

    /// Returns `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is automatically
/// replaced with a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Fallback seed used when the caller provides 0, which is a fixed point
    /// of the xorshift algorithm.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    ///
    /// If `seed` is 0, uses `0x5EED_DEAD_BEEF_CAFE` instead.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }
}

impl RandomSource for Xorshift64 {
    /// Advances the state with shifts (13, 7, 17).
    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}
