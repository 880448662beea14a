//! Linear congruential generator over a 32-bit seed
//!
//! # Algorithm
//!
//! The classic Numerical Recipes recurrence:
//!
//! ```text
//! seed_next = (1664525 * seed + 1013904223) mod 2^32
//! ```
//!
//! The modulus is realized by `u32` wraparound, so every multiply and add
//! wraps deterministically. Bounded output is `(seed_next % upper_limit) + 1`,
//! an inclusive `[1, upper_limit]` range. The mapping carries the usual
//! modulo bias when `upper_limit` does not divide 2^32; that bias is part of
//! the fixed output contract and changing it would change every sequence.
//!
//! # Determinism
//!
//! Same seed → same sequence of values. This is CRITICAL for:
//! - Debugging (reproduce an exact run)
//! - Testing (hard-coded regression anchors)
//! - Replay (restore a checkpointed state and continue)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::seed::seed_from_time;

/// Multiplier constant of the recurrence
const MULTIPLIER: u32 = 1_664_525;

/// Increment constant of the recurrence
const INCREMENT: u32 = 1_013_904_223;

/// Errors that can occur during number generation
#[derive(Debug, Error, PartialEq)]
pub enum RngError {
    #[error("upper limit must be positive, got {upper_limit}")]
    InvalidUpperLimit { upper_limit: i32 },
}

/// Advance `seed` one LCG step and return a value in `[1, upper_limit]`.
///
/// The seed is updated in place before the function returns, so threading
/// the same `u32` through successive calls continues the deterministic
/// sequence. `upper_limit` must be positive; zero or negative limits fail
/// with [`RngError::InvalidUpperLimit`] and leave the seed untouched.
///
/// # Example
/// ```
/// use lcg_random_core_rs::next;
///
/// let mut seed: u32 = 0;
/// let value = next(&mut seed, 100).unwrap();
/// assert_eq!(value, 24);
/// assert_eq!(seed, 1013904223);
/// ```
pub fn next(seed: &mut u32, upper_limit: i32) -> Result<u32, RngError> {
    if upper_limit <= 0 {
        return Err(RngError::InvalidUpperLimit { upper_limit });
    }

    // (a * seed + c) mod 2^32, wrapping is the modulus
    *seed = seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);

    Ok((*seed % upper_limit as u32) + 1)
}

/// Deterministic bounded generator owning its 32-bit seed
///
/// Thin wrapper over [`next`] for callers that prefer owned state to
/// threading a bare `u32`. Serializable so a run can be checkpointed and
/// resumed with the exact same continuation.
///
/// # Example
/// ```
/// use lcg_random_core_rs::LcgRng;
///
/// let mut rng = LcgRng::new(12345);
/// let roll = rng.next_in(6).unwrap(); // [1, 6]
/// assert!(roll >= 1 && roll <= 6);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LcgRng {
    /// Internal seed (32-bit); fully determines the remaining sequence
    state: u32,
}

impl LcgRng {
    /// Create a generator from an explicit seed
    ///
    /// Every `u32` is a valid seed, zero included.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create a generator seeded from the current wall-clock time
    ///
    /// Not reproducible by design; use [`LcgRng::new`] when the run must be
    /// replayable.
    pub fn from_time() -> Self {
        Self::new(seed_from_time())
    }

    /// Generate the next value in `[1, upper_limit]`
    ///
    /// Bit-exact equivalent of calling [`next`] on the internal seed.
    ///
    /// # Example
    /// ```
    /// use lcg_random_core_rs::LcgRng;
    ///
    /// let mut rng = LcgRng::new(0);
    /// assert_eq!(rng.next_in(100).unwrap(), 24);
    /// assert_eq!(rng.next_in(100).unwrap(), 63);
    /// ```
    pub fn next_in(&mut self, upper_limit: i32) -> Result<u32, RngError> {
        next(&mut self.state, upper_limit)
    }

    /// Get the current seed (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use lcg_random_core_rs::LcgRng;
    ///
    /// let rng = LcgRng::new(12345);
    /// let state = rng.state();
    ///
    /// // Later, can recreate the generator from this state
    /// let rng2 = LcgRng::new(state);
    /// assert_eq!(rng2.state(), rng.state());
    /// ```
    pub fn state(&self) -> u32 {
        self.state
    }
}
