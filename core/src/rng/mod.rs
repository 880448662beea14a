//! Pseudo-random number generation
//!
//! Uses the classic Numerical Recipes LCG parameters over a 32-bit state.
//! NOT cryptographically secure - do not use for anything security-sensitive.

mod lcg;
mod seed;

pub use lcg::{next, LcgRng, RngError};
pub use seed::{seed_from_time, FALLBACK_SEED};
