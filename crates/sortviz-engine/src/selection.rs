//! Selection Sort: pick the minimum of the unsorted suffix, swap it into
//! place, grow the sorted prefix.
//!
//! Step vocabulary: one `compared` step per probe of the suffix (always
//! against the *current* minimum candidate), at most one `swapped` step per
//! pass, a prefix-growth marker after each pass, and a final marker.

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

/// Trace Selection Sort over a copy of `input`.
///
/// A pass that finds the minimum already in place emits no `swapped` step,
/// only the prefix marker. Empty input yields the lone final marker.
#[must_use]
pub fn selection_sort_steps(input: &[Value]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut steps = Vec::new();

    for i in 0..n {
        let mut min_idx = i;
        let prefix: Vec<usize> = (0..i).collect();
        for j in i + 1..n {
            steps.push(Step {
                compared: Some([min_idx, j]),
                sorted: Some(prefix.clone()),
                ..Step::snapshot(&arr)
            });
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            arr.swap(i, min_idx);
            steps.push(Step {
                swapped: Some([i, min_idx]),
                sorted: Some(prefix),
                ..Step::snapshot(&arr)
            });
        }
        steps.push(Step {
            sorted: Some((0..=i).collect()),
            ..Step::snapshot(&arr)
        });
    }

    steps.push(Step {
        sorted: Some((0..n).collect()),
        ..Step::snapshot(&arr)
    });
    steps
}
