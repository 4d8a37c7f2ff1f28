// crates/sortviz-engine/src/bubble.rs

//! Bubble Sort: adjacent-pair passes with a growing sorted tail.
//!
//! Step vocabulary: `compared` / `swapped` on every inner-loop probe (the
//! `sorted` tail rides along, possibly empty), one tail-growth marker after
//! each pass, and a final marker covering every index.

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

/// Trace Bubble Sort over a copy of `input`.
///
/// Pass `i` bubbles the largest remaining value to index `n - i - 1`; the
/// trailing `i` indices are already final and are carried in `sorted` on
/// every probe of that pass. Empty input yields the lone final marker.
#[must_use]
pub fn bubble_sort_steps(input: &[Value]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut steps = Vec::new();

    for i in 0..n {
        let tail: Vec<usize> = (n - i..n).collect();
        for j in 0..n - i - 1 {
            steps.push(Step {
                compared: Some([j, j + 1]),
                sorted: Some(tail.clone()),
                ..Step::snapshot(&arr)
            });
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                steps.push(Step {
                    swapped: Some([j, j + 1]),
                    sorted: Some(tail.clone()),
                    ..Step::snapshot(&arr)
                });
            }
        }
        steps.push(Step {
            sorted: Some((n - i - 1..n).collect()),
            ..Step::snapshot(&arr)
        });
    }
    steps.push(Step {
        sorted: Some((0..n).collect()),
        ..Step::snapshot(&arr)
    });
    steps
}
