//! Time-based seed source
//!
//! Derives a varying seed from the wall clock so successive program runs
//! are decorrelated. The value is milliseconds since the Unix epoch
//! truncated to 32 bits; the truncation is intentional, this is a seed,
//! not a timestamp.

use std::time::{SystemTime, UNIX_EPOCH};

/// Seed used when the system clock reads before the Unix epoch
pub const FALLBACK_SEED: u32 = 1;

/// Derive a seed from the current wall-clock time.
///
/// Computes `seconds * 1000 + subsecond_millis` and truncates to 32 bits
/// by unsigned wraparound. Not deterministic and not reproducible; calls
/// separated by at least one millisecond return different values.
///
/// # Example
/// ```
/// use lcg_random_core_rs::{seed_from_time, LcgRng};
///
/// let mut rng = LcgRng::new(seed_from_time());
/// let value = rng.next_in(100).unwrap();
/// assert!(value >= 1 && value <= 100);
/// ```
pub fn seed_from_time() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed
            .as_secs()
            .wrapping_mul(1000)
            .wrapping_add(u64::from(elapsed.subsec_millis())) as u32,
        Err(_) => FALLBACK_SEED,
    }
}
