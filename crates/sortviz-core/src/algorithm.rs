//! The closed set of algorithms the engine can trace.
//!
//! Serialized ids are the kebab-case variant names (`"bubble"`, `"heap"`, …)
//! and are what trace files embed; [`Algorithm::name`] is the human-readable
//! form. [`Algorithm::description`], [`Algorithm::complexity`], and
//! [`Algorithm::video`] carry the catalog copy front-ends display.

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one of the ten supported sorting algorithms.
///
/// The set is closed: dispatch matches exhaustively, and adding a variant is
/// a breaking change by design.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Adjacent-swap passes with a growing sorted tail.
    Bubble,
    /// Minimum selection into a growing sorted prefix.
    Selection,
    /// Key insertion into a sorted prefix by right-shifting.
    Insertion,
    /// Recursive halving and two-way merge.
    Merge,
    /// Lomuto partition around a trailing pivot.
    Quick,
    /// Gapped insertion with a shrinking gap sequence.
    Shell,
    /// Histogram of value occurrences, positions by arithmetic.
    Counting,
    /// Stable least-significant-digit passes in base 10.
    Radix,
    /// Distribution into value-ranged buckets, then concatenation.
    Bucket,
    /// Max-heap build followed by repeated root extraction.
    Heap,
}

impl Algorithm {
    /// All supported algorithms, in catalog order.
    pub const ALL: [Self; 10] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Shell,
        Self::Counting,
        Self::Radix,
        Self::Bucket,
        Self::Heap,
    ];

    /// Stable kebab-case id, identical to the serde form.
    #[inline]
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Shell => "shell",
            Self::Counting => "counting",
            Self::Radix => "radix",
            Self::Bucket => "bucket",
            Self::Heap => "heap",
        }
    }

    /// Human-readable name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Shell => "Shell Sort",
            Self::Counting => "Counting Sort",
            Self::Radix => "Radix Sort",
            Self::Bucket => "Bucket Sort",
            Self::Heap => "Heap Sort",
        }
    }

    /// One-line catalog description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Bubble => {
                "Bubble Sort repeatedly compares adjacent elements and swaps them if they are in the wrong order until the array is sorted."
            }
            Self::Selection => {
                "Selection Sort finds the minimum element from the unsorted portion and swaps it with the first unsorted element."
            }
            Self::Insertion => {
                "Insertion Sort builds a sorted array one element at a time by inserting each new element in its proper position."
            }
            Self::Merge => {
                "Merge Sort divides the array into halves, recursively sorts each half, and then merges them back together."
            }
            Self::Quick => {
                "Quick Sort selects a pivot element and partitions the array so that elements less than the pivot come before it and those greater come after it, then recursively sorts the partitions."
            }
            Self::Shell => {
                "Shell Sort is a variation of Insertion Sort that initially sorts elements far apart, reducing the gap over successive passes."
            }
            Self::Counting => {
                "Counting Sort counts the occurrences of each distinct element and computes positions using arithmetic."
            }
            Self::Radix => {
                "Radix Sort processes numbers digit by digit (from least significant to most) using a stable sort."
            }
            Self::Bucket => {
                "Bucket Sort distributes elements into buckets, sorts each bucket, and concatenates them to produce a sorted array."
            }
            Self::Heap => {
                "Heap Sort builds a max heap and repeatedly extracts the largest element to form a sorted array."
            }
        }
    }

    /// Time-complexity summary shown alongside the description.
    #[must_use]
    pub const fn complexity(self) -> &'static str {
        match self {
            Self::Bubble => "O(n²)",
            Self::Selection => "O(n²)",
            Self::Insertion => "Best-case: O(n) | Worst-case: O(n²)",
            Self::Merge => "O(n log n)",
            Self::Quick => "Average: O(n log n) | Worst-case: O(n²)",
            Self::Shell => "Approximately O(n^(3/2)) (depends on gap sequence)",
            Self::Counting => "O(n + k)",
            Self::Radix => "O(d*(n + b)) where d = number of digits, b = base",
            Self::Bucket => "Average-case: O(n) (depends on distribution)",
            Self::Heap => "O(n log n)",
        }
    }

    /// Link to a video walkthrough of the algorithm.
    #[must_use]
    pub const fn video(self) -> &'static str {
        match self {
            Self::Bubble => "https://www.youtube.com/watch?v=Dv4qLJcxus8",
            Self::Selection => "https://www.youtube.com/watch?v=EwjnF7rFLns",
            Self::Insertion => "https://www.youtube.com/watch?v=8mJ-OhcfpYg",
            Self::Merge => "https://www.youtube.com/watch?v=3j0SWDX4AtU",
            Self::Quick => "https://www.youtube.com/watch?v=Vtckgz38QHs&t=205s",
            Self::Shell => "https://www.youtube.com/watch?v=SHcPqUe2GZM",
            Self::Counting => "https://www.youtube.com/watch?v=OKd534EWcdk",
            Self::Radix => "https://www.youtube.com/watch?v=nu4gDuFabIM",
            Self::Bucket => "https://www.youtube.com/watch?v=VuXbEb5ywrU",
            Self::Heap => "https://www.youtube.com/watch?v=2DmK_H7IdTo",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Parse a kebab-case id (`"bubble"`, `"heap"`, …).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| anyhow!("unknown algorithm id: {s:?}"))
    }
}
