// crates/sortviz-engine/src/heap.rs

//! Heap Sort: build a max heap in place, then repeatedly swap the root to
//! the back and re-heapify the shrunken prefix.
//!
//! Step vocabulary: an opening bare snapshot, a bare snapshot after each
//! build-phase sift (with `swapped` steps for the sifts themselves), an
//! extraction swap marking the finalized tail, `swapped` steps during each
//! re-heapify, a post-heapify snapshot with the tail grown by one, and a
//! final marker.

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

/// Trace Heap Sort over a copy of `input`.
///
/// Children of node `i` sit at `2i + 1` and `2i + 2`. Inputs of length 0
/// or 1 yield the opening snapshot plus the final marker.
#[must_use]
pub fn heap_sort_steps(input: &[Value]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut steps = Vec::new();

    steps.push(Step::snapshot(&arr));

    // Build max heap from the last parent down to the root.
    for i in (0..n / 2).rev() {
        heapify(&mut arr, n, i, &mut steps);
        steps.push(Step::snapshot(&arr));
    }

    // Extract the maximum into the growing tail.
    for i in (1..n).rev() {
        arr.swap(0, i);
        steps.push(Step {
            swapped: Some([0, i]),
            sorted: Some((i..n).collect()),
            ..Step::snapshot(&arr)
        });
        heapify(&mut arr, i, 0, &mut steps);
        steps.push(Step {
            sorted: Some((i - 1..n).collect()),
            ..Step::snapshot(&arr)
        });
    }

    steps.push(Step {
        sorted: Some((0..n).collect()),
        ..Step::snapshot(&arr)
    });
    steps
}

/// Sift `arr[i]` down within the first `heap_size` elements, recording a
/// `swapped` step per exchange.
fn heapify(arr: &mut [Value], heap_size: usize, i: usize, steps: &mut Vec<Step>) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < heap_size && arr[left] > arr[largest] {
        largest = left;
    }
    if right < heap_size && arr[right] > arr[largest] {
        largest = right;
    }
    if largest != i {
        arr.swap(i, largest);
        steps.push(Step {
            swapped: Some([i, largest]),
            ..Step::snapshot(arr)
        });
        heapify(arr, heap_size, largest, steps);
    }
}
