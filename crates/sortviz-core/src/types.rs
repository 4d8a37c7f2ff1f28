//! Canonical step/trace types used across the sortviz workspace.
//!
//! These live in `sortviz-core` and are broadly re-exported at the crate root
//! so other crates can import via `sortviz_core::Step`, `sortviz_core::Value`, etc.
//!
//! The serialized form mirrors the player's wire shape: camelCase keys, and
//! annotation fields omitted entirely when not applicable (`None`). An empty
//! sorted set (`Some(vec![])`) is meaningful and survives serialization as
//! `"sorted": []`.

use serde::{Deserialize, Serialize};

/// Array element. Signed so offset-based generators can handle negatives.
pub type Value = i64;

/// Pair of array indices, serialized as a two-element array.
pub type IndexPair = [usize; 2];

/// One frame of an algorithm trace: a full snapshot of the working array
/// plus optional annotations describing what the algorithm just did.
///
/// Every annotation is `None` unless the emitting generator set it, and the
/// co-occurrence rules are per-algorithm (e.g. only Quick Sort populates
/// `pivot`/`left`/`right`; only Merge Sort populates the range fields).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Deep copy of the working array at this moment.
    pub array: Vec<Value>,

    /// Indices whose values were just compared.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub compared: Option<IndexPair>,
    /// Indices whose values were just exchanged.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub swapped: Option<IndexPair>,
    /// `[from, to]` of an element being moved one slot right (Insertion).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shifting: Option<IndexPair>,
    /// `[to, from]` of a completed gap-shift (Shell).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shifted: Option<IndexPair>,
    /// Index of the element currently being inserted (Insertion).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub key: Option<usize>,
    /// Index of the element whose insertion just completed.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub inserted: Option<usize>,
    /// Indices known to hold their final values. Emitted in ascending order;
    /// may be present-but-empty.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sorted: Option<Vec<usize>>,
    /// Current pivot index (Quick).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pivot: Option<usize>,
    /// Partition boundary: next slot for a value below the pivot (Quick).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub left: Option<usize>,
    /// Partition scan cursor (Quick).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub right: Option<usize>,
    /// Inclusive `[left, right]` range a merge recursion just entered.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub active_range: Option<IndexPair>,
    /// Inclusive `[left, right]` range a merge just completed.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub merged_range: Option<IndexPair>,
}

impl Step {
    /// Bare snapshot of `array` with no annotations.
    #[inline]
    #[must_use]
    pub fn snapshot(array: &[Value]) -> Self {
        Self {
            array: array.to_vec(),
            ..Self::default()
        }
    }

    /// Number of elements in the snapshot.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Whether the snapshot is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Every array index referenced by an annotation field (the snapshot
    /// itself is not included). Useful for bounds checks.
    #[must_use]
    pub fn annotated_indices(&self) -> Vec<usize> {
        let mut out = Vec::new();
        for pair in [
            self.compared,
            self.swapped,
            self.shifting,
            self.shifted,
            self.active_range,
            self.merged_range,
        ]
        .into_iter()
        .flatten()
        {
            out.extend_from_slice(&pair);
        }
        for idx in [self.key, self.inserted, self.pivot, self.left, self.right]
            .into_iter()
            .flatten()
        {
            out.push(idx);
        }
        if let Some(s) = &self.sorted {
            out.extend_from_slice(s);
        }
        out
    }
}
