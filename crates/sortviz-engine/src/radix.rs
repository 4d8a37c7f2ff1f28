//! Radix Sort: stable least-significant-digit passes in base 10.
//!
//! Digit passes are silent internally; the trace is one bare snapshot of
//! the input, one bare snapshot after each completed digit pass, and a
//! final marker covering every index. An all-zero input needs no passes at
//! all.

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

/// Trace Radix Sort over a copy of `input`.
///
/// Empty input yields just the opening snapshot.
///
/// # Panics
/// Panics if any value is negative; digit extraction is defined for
/// non-negative values only.
#[must_use]
pub fn radix_sort_steps(input: &[Value]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut steps = Vec::new();

    steps.push(Step::snapshot(&arr));
    if n == 0 {
        return steps;
    }
    assert!(
        arr.iter().all(|&v| v >= 0),
        "radix sort requires non-negative values"
    );

    let mut max = arr[0];
    for &v in &arr {
        if v > max {
            max = v;
        }
    }

    let mut exp: Value = 1;
    while max / exp > 0 {
        let mut output = vec![Value::default(); n];
        let mut count = [0usize; 10];
        for &v in &arr {
            count[digit(v, exp)] += 1;
        }
        for d in 1..10 {
            count[d] += count[d - 1];
        }
        for &v in arr.iter().rev() {
            let d = digit(v, exp);
            count[d] -= 1;
            output[count[d]] = v;
        }
        arr = output;
        steps.push(Step::snapshot(&arr));

        // Past the top digit the loop would exit anyway; stop on overflow.
        match exp.checked_mul(10) {
            Some(next) => exp = next,
            None => break,
        }
    }

    steps.push(Step {
        sorted: Some((0..n).collect()),
        ..Step::snapshot(&arr)
    });
    steps
}

/// Base-10 digit of `v` selected by `exp` (1, 10, 100, …).
fn digit(v: Value, exp: Value) -> usize {
    usize::try_from((v / exp) % 10).unwrap_or(0)
}
