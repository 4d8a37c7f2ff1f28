// crates/sortviz-engine/src/input.rs

//! Seeded random input arrays matching the player's value distribution.
//! Produces `len` values uniform in `[10, 309]`; the seed makes runs
//! reproducible end to end.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]

use rand::{rngs::StdRng, Rng as _, SeedableRng};
use sortviz_core::Value;

/// Element count of a standard interactive array.
pub const STANDARD_LEN: usize = 15;
/// Element count of a bulk (bar-graph race) array.
pub const BULK_LEN: usize = 100;
/// Smallest generated value.
pub const MIN_VALUE: Value = 10;
/// Largest generated value.
pub const MAX_VALUE: Value = 309;

/// Generate `len` values uniform in `[MIN_VALUE, MAX_VALUE]`.
#[must_use]
pub fn random_array(len: usize, seed: u64) -> Vec<Value> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut arr = Vec::with_capacity(len);
    for _ in 0..len {
        arr.push(rng.random_range(MIN_VALUE..=MAX_VALUE));
    }
    arr
}
