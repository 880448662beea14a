//! LCG Random Core - Rust Engine
//!
//! Minimal linear congruential generator producing bounded integers from a
//! caller-owned 32-bit seed, plus a wall-clock helper for deriving an
//! initial seed.
//!
//! # Architecture
//!
//! - **rng**: the LCG step function, the `LcgRng` wrapper, and the
//!   time-based seed source
//!
//! # Critical Invariants
//!
//! 1. All generator state is a single `u32` owned by the caller
//! 2. Generation is deterministic (same seed, same sequence, every run)
//! 3. Overflow in the recurrence is intended modular wraparound, never an error

// Module declarations
pub mod rng;

// Re-exports for convenience
pub use rng::{next, seed_from_time, LcgRng, RngError, FALLBACK_SEED};
