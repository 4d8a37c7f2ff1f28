//! Step generators for the ten sortviz algorithms.
//!
//! Each generator is a pure function `&[Value] -> Vec<Step>`: it never
//! mutates its input, works on an internal copy, and emits one [`Step`]
//! snapshot per visualized micro-operation. Traces are deterministic, so a
//! player can replay, scrub, or diff them freely.
//!
//! The crate also carries a few small companions:
//!
//! - `tree`: the merge-sort display tree (recursion structure only).
//! - `input`: a seeded random input generator matching the player's value
//!   distribution.
//! - `dispatch`: the single integration point mapping an [`Algorithm`] id
//!   to its generator.
//!
//! We intentionally avoid broad re-exports so callers use stable paths like
//! `sortviz_engine::dispatch::steps_for`.
//!
//! [`Step`]: sortviz_core::Step
//! [`Algorithm`]: sortviz_core::Algorithm

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

/// Bubble Sort generator.
pub mod bubble;
/// Bucket Sort generator.
pub mod bucket;
/// Counting Sort generator.
pub mod counting;
/// Algorithm-id to generator dispatch.
pub mod dispatch;
/// Heap Sort generator.
pub mod heap;
/// Seeded random input arrays.
pub mod input;
/// Insertion Sort generator.
pub mod insertion;
/// Merge Sort generator.
pub mod merge;
/// Quick Sort generator.
pub mod quick;
/// Radix Sort generator.
pub mod radix;
/// Selection Sort generator.
pub mod selection;
/// Shell Sort generator.
pub mod shell;
/// Merge-sort display tree builder.
pub mod tree;
