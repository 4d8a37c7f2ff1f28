//! Counting Sort: histogram of value offsets, placement by prefix sums,
//! then a left-to-right reveal of the result.
//!
//! The arithmetic all happens up front and silently; the trace is one bare
//! snapshot of the input followed by `n` reveal steps, each overwriting one
//! more index with its final value and marking the grown prefix `sorted`.
//! The reveal runs left to right even though placement was computed by a
//! reverse scan.

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

/// Trace Counting Sort over a copy of `input`.
///
/// Negative values are handled by offsetting against the minimum. Empty
/// input yields an empty trace, the only generator for which that is legal.
///
/// # Panics
/// Panics if the value span `max - min + 1` does not fit in `usize`.
#[must_use]
pub fn counting_sort_steps(input: &[Value]) -> Vec<Step> {
    let n = input.len();
    let mut steps = Vec::new();
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
    let range = match usize::try_from(span) {
        Ok(r) => r,
        Err(_) => panic!("counting sort: value span {span} is not addressable"),
    };

    let mut count = vec![0usize; range];
    for &v in input {
        count[offset(v, min)] += 1;
    }
    for i in 1..range {
        count[i] += count[i - 1];
    }

    let mut sorted_arr = vec![Value::default(); n];
    for &v in input.iter().rev() {
        let slot = &mut count[offset(v, min)];
        *slot -= 1;
        sorted_arr[*slot] = v;
    }

    let mut current = input.to_vec();
    steps.push(Step::snapshot(&current));
    for i in 0..n {
        current[i] = sorted_arr[i];
        steps.push(Step {
            sorted: Some((0..=i).collect()),
            ..Step::snapshot(&current)
        });
    }
    steps
}

/// Offset of `v` within the `[min, max]` histogram (never negative; clamp
/// keeps the conversion total).
fn offset(v: Value, min: Value) -> usize {
    usize::try_from(i128::from(v) - i128::from(min)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_left_to_right() {
        let steps = counting_sort_steps(&[4, 2, 2, 8, 3, 3, 1]);
        // One bare snapshot plus one reveal per element.
        assert_eq!(steps.len(), 8);
        assert!(steps[0].sorted.is_none());
        assert_eq!(steps[0].array, vec![4, 2, 2, 8, 3, 3, 1]);

        // First reveal replaces index 0 only; the tail is still the input.
        assert_eq!(steps[1].array, vec![1, 2, 2, 8, 3, 3, 1]);
        assert_eq!(steps[1].sorted, Some(vec![0]));

        let last = steps.last().unwrap();
        assert_eq!(last.array, vec![1, 2, 2, 3, 3, 4, 8]);
        assert_eq!(last.sorted, Some((0..7).collect::<Vec<_>>()));
    }

    #[test]
    fn negative_values_sort_via_the_offset() {
        let steps = counting_sort_steps(&[-1, -3, 2]);
        assert_eq!(steps.last().unwrap().array, vec![-3, -1, 2]);
    }

    #[test]
    fn empty_input_yields_an_empty_trace() {
        assert!(counting_sort_steps(&[]).is_empty());
    }

    #[test]
    fn constant_input_still_reveals_each_index() {
        let steps = counting_sort_steps(&[7, 7]);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2].array, vec![7, 7]);
        assert_eq!(steps[2].sorted, Some(vec![0, 1]));
    }
}
