//! Insertion Sort: grow a sorted prefix by inserting one key at a time.
//!
//! Step vocabulary: an opening marker for the trivially sorted first
//! element, a `key` pick per iteration, one `shifting` step per slot the
//! key's predecessors move right, an `inserted` marker when the key lands,
//! and a final marker covering every index.

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

/// Trace Insertion Sort over a copy of `input`.
///
/// The `sorted` prefix on key/shift steps is the prefix *before* the current
/// insertion; the `inserted` marker extends it by one. Empty input yields
/// the lone final marker.
#[must_use]
pub fn insertion_sort_steps(input: &[Value]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut steps = Vec::new();

    if n == 0 {
        steps.push(Step {
            sorted: Some(vec![]),
            ..Step::snapshot(&arr)
        });
        return steps;
    }

    // First element is trivially sorted.
    steps.push(Step {
        sorted: Some(vec![0]),
        ..Step::snapshot(&arr)
    });

    for i in 1..n {
        let key = arr[i];
        let prefix: Vec<usize> = (0..i).collect();
        steps.push(Step {
            key: Some(i),
            sorted: Some(prefix.clone()),
            ..Step::snapshot(&arr)
        });

        let mut j = i;
        while j > 0 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            steps.push(Step {
                shifting: Some([j - 1, j]),
                sorted: Some(prefix.clone()),
                ..Step::snapshot(&arr)
            });
            j -= 1;
        }
        arr[j] = key;
        steps.push(Step {
            inserted: Some(i),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_marks_everything() {
        let steps = insertion_sort_steps(&[5, 2, 4, 6, 1, 3]);
        let last = steps.last().unwrap();
        assert_eq!(last.array, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(last.sorted, Some(vec![0, 1, 2, 3, 4, 5]));
    }

    #[test]
    fn opening_marker_claims_only_index_zero() {
        let steps = insertion_sort_steps(&[9, 1]);
        assert_eq!(steps[0].sorted, Some(vec![0]));
        assert!(steps[0].key.is_none());
    }

    #[test]
    fn shifts_walk_the_key_down() {
        // Inserting 1 under [3, 5] shifts both predecessors.
        let steps = insertion_sort_steps(&[3, 5, 1]);
        let shifts: Vec<_> = steps.iter().filter_map(|s| s.shifting).collect();
        assert_eq!(shifts, vec![[1, 2], [0, 1]]);
        let landed = steps.iter().find(|s| s.inserted == Some(2)).unwrap();
        assert_eq!(landed.array, vec![1, 3, 5]);
        assert_eq!(landed.sorted, Some(vec![0, 1, 2]));
    }

    #[test]
    fn empty_input_is_one_final_marker() {
        let steps = insertion_sort_steps(&[]);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].sorted, Some(vec![]));
    }

    #[test]
    fn singleton_input_is_opening_plus_final() {
        let steps = insertion_sort_steps(&[7]);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].sorted, Some(vec![0]));
    }
}
