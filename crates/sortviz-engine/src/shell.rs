//! Shell Sort: gapped insertion passes with a halving gap sequence.
//!
//! Step vocabulary: inside a gap pass, each shift emits a `compared` step
//! (the probe that decided to shift) followed by a `shifted` step; probes
//! that decide *not* to shift are silent. Placement markers (`inserted` +
//! `sorted` prefix) appear only during the final `gap == 1` pass, and a
//! final marker closes the trace.

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

/// Trace Shell Sort over a copy of `input`.
///
/// Gap sequence is `n/2, n/4, …, 1` by floor halving. Pairs are `[j,
/// j - gap]`, destination first. Inputs of length 0 or 1 yield the lone
/// final marker.
#[must_use]
pub fn shell_sort_steps(input: &[Value]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut steps = Vec::new();

    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let temp = arr[i];
            let mut j = i;
            while j >= gap && arr[j - gap] > temp {
                steps.push(Step {
                    compared: Some([j, j - gap]),
                    ..Step::snapshot(&arr)
                });
                arr[j] = arr[j - gap];
                steps.push(Step {
                    shifted: Some([j, j - gap]),
                    ..Step::snapshot(&arr)
                });
                j -= gap;
            }
            arr[j] = temp;
            if gap == 1 {
                steps.push(Step {
                    inserted: Some(i),
                    sorted: Some((0..=i).collect()),
                    ..Step::snapshot(&arr)
                });
            }
        }
        gap /= 2;
    }

    steps.push(Step {
        sorted: Some((0..n).collect()),
        ..Step::snapshot(&arr)
    });
    steps
}
