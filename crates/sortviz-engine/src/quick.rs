//! Quick Sort: Lomuto partition around the trailing element, with pointer
//! annotations and a cumulative set of placed pivots.
//!
//! Step vocabulary: every partition probe carries `pivot`/`left`/`right`
//! pointers plus `compared`; below-pivot hits add a `swapped` step with the
//! same pointers; the pivot's placement swap re-points `pivot` at its final
//! index; singleton ranges emit a bare placement marker; a final marker
//! closes the trace. The `sorted` set on every step is the set of all
//! indices placed so far and only ever grows.

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
use std::collections::BTreeSet;

/// Trace Quick Sort over a copy of `input`.
///
/// Empty input yields the lone final marker; a singleton registers its only
/// index before the final marker.
#[must_use]
pub fn quick_sort_steps(input: &[Value]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut steps = Vec::new();
    let mut placed = BTreeSet::new();

    if n > 0 {
        sort_range(&mut arr, 0, n - 1, &mut placed, &mut steps);
    }
    steps.push(Step {
        sorted: Some((0..n).collect()),
        ..Step::snapshot(&arr)
    });
    steps
}

/// Sort `arr[low..=high]` (callers guarantee `low <= high`).
fn sort_range(
    arr: &mut [Value],
    low: usize,
    high: usize,
    placed: &mut BTreeSet<usize>,
    steps: &mut Vec<Step>,
) {
    if low < high {
        let p = partition(arr, low, high, placed, steps);
        if p > low {
            sort_range(arr, low, p - 1, placed, steps);
        }
        if p < high {
            sort_range(arr, p + 1, high, placed, steps);
        }
    } else {
        // Singleton range: its element is already in place.
        placed.insert(low);
        steps.push(Step {
            sorted: Some(as_vec(placed)),
            ..Step::snapshot(arr)
        });
    }
}

/// Lomuto partition of `arr[low..=high]` around `arr[high]`; returns the
/// pivot's final index.
fn partition(
    arr: &mut [Value],
    low: usize,
    high: usize,
    placed: &mut BTreeSet<usize>,
    steps: &mut Vec<Step>,
) -> usize {
    let pivot = arr[high];
    let mut i = low;
    for j in low..high {
        steps.push(Step {
            pivot: Some(high),
            left: Some(i),
            right: Some(j),
            compared: Some([j, high]),
            sorted: Some(as_vec(placed)),
            ..Step::snapshot(arr)
        });
        if arr[j] < pivot {
            arr.swap(i, j);
            steps.push(Step {
                pivot: Some(high),
                left: Some(i),
                right: Some(j),
                swapped: Some([i, j]),
                sorted: Some(as_vec(placed)),
                ..Step::snapshot(arr)
            });
            i += 1;
        }
    }
    arr.swap(i, high);
    placed.insert(i);
    steps.push(Step {
        pivot: Some(i),
        left: Some(i),
        right: Some(high),
        swapped: Some([i, high]),
        sorted: Some(as_vec(placed)),
        ..Step::snapshot(arr)
    });
    i
}

/// Ascending copy of the placed-pivot set.
fn as_vec(placed: &BTreeSet<usize>) -> Vec<usize> {
    placed.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_marks_everything() {
        let steps = quick_sort_steps(&[10, 7, 8, 9, 1, 5]);
        let last = steps.last().unwrap();
        assert_eq!(last.array, vec![1, 5, 7, 8, 9, 10]);
        assert_eq!(last.sorted, Some((0..6).collect::<Vec<_>>()));
    }

    #[test]
    fn probes_carry_all_three_pointers() {
        let steps = quick_sort_steps(&[3, 1, 2]);
        let first = &steps[0];
        assert_eq!(first.pivot, Some(2));
        assert_eq!(first.left, Some(0));
        assert_eq!(first.right, Some(0));
        assert_eq!(first.compared, Some([0, 2]));
        assert_eq!(first.sorted, Some(vec![]));
    }

    #[test]
    fn placement_swap_repoints_the_pivot() {
        let steps = quick_sort_steps(&[3, 1, 2]);
        let placement = steps
            .iter()
            .find(|s| s.swapped.is_some() && s.pivot == s.left)
            .unwrap();
        assert_eq!(placement.pivot, Some(1));
        assert_eq!(placement.swapped, Some([1, 2]));
        assert_eq!(placement.sorted, Some(vec![1]));
    }

    #[test]
    fn placed_set_only_grows() {
        let steps = quick_sort_steps(&[5, 3, 8, 1, 9, 2, 7]);
        let mut prev: Vec<usize> = vec![];
        for s in steps.iter().filter(|s| s.sorted.is_some()) {
            let cur = s.sorted.clone().unwrap();
            assert!(prev.iter().all(|x| cur.contains(x)), "set shrank");
            assert!(cur.windows(2).all(|w| w[0] < w[1]), "set not ascending");
            prev = cur;
        }
        assert_eq!(prev, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn singleton_registers_its_index() {
        let steps = quick_sort_steps(&[1]);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].sorted, Some(vec![0]));
        assert_eq!(steps[1].sorted, Some(vec![0]));
    }

    #[test]
    fn empty_input_is_one_final_marker() {
        let steps = quick_sort_steps(&[]);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].sorted, Some(vec![]));
    }
}
