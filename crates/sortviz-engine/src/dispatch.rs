//! Algorithm-id to generator dispatch: the single point a player (or the
//! CLI) integrates against. Adding an algorithm means adding a variant and
//! an arm here; the match is deliberately exhaustive.

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

use sortviz_core::{Algorithm, Step, TraceFile, Value};

use crate::{bubble, bucket, counting, heap, insertion, merge, quick, radix, selection, shell};

/// Run the generator for `algorithm` over `input`.
///
/// # Panics
/// Radix Sort panics on negative values; see [`crate::radix`].
#[must_use]
pub fn steps_for(algorithm: Algorithm, input: &[Value]) -> Vec<Step> {
    match algorithm {
        Algorithm::Bubble => bubble::bubble_sort_steps(input),
        Algorithm::Selection => selection::selection_sort_steps(input),
        Algorithm::Insertion => insertion::insertion_sort_steps(input),
        Algorithm::Merge => merge::merge_sort_steps(input),
        Algorithm::Quick => quick::quick_sort_steps(input),
        Algorithm::Shell => shell::shell_sort_steps(input),
        Algorithm::Counting => counting::counting_sort_steps(input),
        Algorithm::Radix => radix::radix_sort_steps(input),
        Algorithm::Bucket => bucket::bucket_sort_steps(input),
        Algorithm::Heap => heap::heap_sort_steps(input),
    }
}

/// Run the generator for `algorithm` and wrap the result in a
/// current-version [`TraceFile`] that embeds the input.
#[must_use]
pub fn generate_trace(algorithm: Algorithm, input: &[Value]) -> TraceFile {
    TraceFile::new(algorithm, input.to_vec(), steps_for(algorithm, input))
}
