// crates/sortviz-engine/src/merge.rs

//! Merge Sort: recursive halving, then two-way merges over scratch copies.
//!
//! Step vocabulary: an `activeRange` announcement on *entering* every
//! recursion (singletons included), one `compared` step per head-to-head
//! probe followed by a bare placement snapshot, bare snapshots for drained
//! leftovers, a `sorted` marker covering the merged range, a `mergedRange`
//! announcement on leaving the recursion, and a final marker.

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

/// Trace Merge Sort over a copy of `input`.
///
/// Ranges are inclusive `[left, right]`; the left half of a split gets the
/// midpoint element. Ties favor the left half, which keeps the merge
/// stable. Empty input yields the lone final marker.
#[must_use]
pub fn merge_sort_steps(input: &[Value]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut steps = Vec::new();

    if n > 0 {
        sort_range(&mut arr, 0, n - 1, &mut steps);
    }
    steps.push(Step {
        sorted: Some((0..n).collect()),
        ..Step::snapshot(&arr)
    });
    steps
}

/// Recursively sort `arr[left..=right]`, announcing the range on entry and
/// (for non-singletons) on completion.
fn sort_range(arr: &mut [Value], left: usize, right: usize, steps: &mut Vec<Step>) {
    steps.push(Step {
        active_range: Some([left, right]),
        ..Step::snapshot(arr)
    });
    if left < right {
        let mid = left + (right - left) / 2;
        sort_range(arr, left, mid, steps);
        sort_range(arr, mid + 1, right, steps);
        merge(arr, left, mid, right, steps);
        steps.push(Step {
            merged_range: Some([left, right]),
            ..Step::snapshot(arr)
        });
    }
}

/// Merge the sorted halves `arr[left..=mid]` and `arr[mid+1..=right]`.
fn merge(arr: &mut [Value], left: usize, mid: usize, right: usize, steps: &mut Vec<Step>) {
    let left_half = arr[left..=mid].to_vec();
    let right_half = arr[mid + 1..=right].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = left;
    while i < left_half.len() && j < right_half.len() {
        steps.push(Step {
            compared: Some([left + i, mid + 1 + j]),
            ..Step::snapshot(arr)
        });
        if left_half[i] <= right_half[j] {
            arr[k] = left_half[i];
            i += 1;
        } else {
            arr[k] = right_half[j];
            j += 1;
        }
        steps.push(Step::snapshot(arr));
        k += 1;
    }
    while i < left_half.len() {
        arr[k] = left_half[i];
        i += 1;
        k += 1;
        steps.push(Step::snapshot(arr));
    }
    while j < right_half.len() {
        arr[k] = right_half[j];
        j += 1;
        k += 1;
        steps.push(Step::snapshot(arr));
    }

    steps.push(Step {
        sorted: Some((left..=right).collect()),
        ..Step::snapshot(arr)
    });
}
