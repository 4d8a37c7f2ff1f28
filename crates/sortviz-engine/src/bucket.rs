//! Bucket Sort: distribute values into `n` value-ranged buckets, sort each
//! bucket internally, then concatenate.
//!
//! Distribution and the per-bucket insertion sorts are silent; the trace is
//! one bare snapshot of the input followed by one step per bucket in index
//! order. Each bucket step overlays the concatenated prefix onto the input
//! and marks it `sorted`; empty buckets still emit their (duplicate) step.

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

use sortviz_core::{Step, Value};

/// Trace Bucket Sort over a copy of `input`.
///
/// A value lands in bucket `(v - min) * n / (max - min + 1)`, which maps
/// the inclusive value range onto `0..n`. The last bucket step doubles as
/// the final marker. Empty input yields just the opening snapshot.
#[must_use]
pub fn bucket_sort_steps(input: &[Value]) -> Vec<Step> {
    let n = input.len();
    let mut steps = Vec::new();

    steps.push(Step::snapshot(input));
    if n == 0 {
        return steps;
    }

    let mut min = input[0];
    let mut max = input[0];
    for &v in input {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    let span = i128::from(max) - i128::from(min) + 1;

    let mut buckets: Vec<Vec<Value>> = vec![Vec::new(); n];
    for &v in input {
        buckets[bucket_index(v, min, span, n)].push(v);
    }
    for bucket in &mut buckets {
        insertion_sort(bucket);
    }

    let mut sorted_prefix: Vec<Value> = Vec::with_capacity(n);
    for bucket in &buckets {
        sorted_prefix.extend_from_slice(bucket);
        let mut current = input.to_vec();
        current[..sorted_prefix.len()].copy_from_slice(&sorted_prefix);
        steps.push(Step {
            sorted: Some((0..sorted_prefix.len()).collect()),
            ..Step::snapshot(&current)
        });
    }
    steps
}

/// Bucket for `v`, scaling its offset into `0..n` (floor division; the
/// clamp keeps the conversion total).
fn bucket_index(v: Value, min: Value, span: i128, n: usize) -> usize {
    let scaled = (i128::from(v) - i128::from(min)) * (n as i128) / span;
    usize::try_from(scaled).unwrap_or(0)
}

/// Plain in-place insertion sort for one bucket (emits no steps).
fn insertion_sort(bucket: &mut [Value]) {
    for i in 1..bucket.len() {
        let key = bucket[i];
        let mut j = i;
        while j > 0 && bucket[j - 1] > key {
            bucket[j] = bucket[j - 1];
            j -= 1;
        }
        bucket[j] = key;
    }
}
