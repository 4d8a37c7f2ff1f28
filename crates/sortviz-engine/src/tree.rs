//! Merge-sort display tree: the recursion structure as data, for side-view
//! rendering next to a running merge trace.
//!
//! The tree bisects the *original* array top-down and never sorts anything.
//! The left child receives `floor(n/2)` elements, which intentionally
//! differs from the trace recursion in `crate::merge` (whose inclusive
//! midpoint puts the extra element on the left); players render the two
//! independently.

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

use serde::{Deserialize, Serialize};
use sortviz_core::Value;

/// One node of the display tree: its value slice and, for non-leaves, the
/// two halves. Leaves (length <= 1) omit the children entirely.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MergeNode {
    /// The slice of values this node covers.
    pub array: Vec<Value>,
    /// First `floor(n/2)` elements, absent on leaves.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub left: Option<Box<MergeNode>>,
    /// Remaining elements, absent on leaves.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub right: Option<Box<MergeNode>>,
}

impl MergeNode {
    /// Whether this node has no children.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of levels, counting this node (a lone leaf has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        match (&self.left, &self.right) {
            (Some(l), Some(r)) => 1 + l.depth().max(r.depth()),
            (Some(c), None) | (None, Some(c)) => 1 + c.depth(),
            (None, None) => 1,
        }
    }

    /// Number of leaves under (and including) this node.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match (&self.left, &self.right) {
            (None, None) => 1,
            (l, r) => {
                l.as_ref().map_or(0, |c| c.leaf_count())
                    + r.as_ref().map_or(0, |c| c.leaf_count())
            }
        }
    }
}

/// Build the display tree for `input` by repeated bisection.
///
/// Arrays of length 0 or 1 are leaves; an empty input is a single empty
/// leaf.
#[must_use]
pub fn build_merge_tree(input: &[Value]) -> MergeNode {
    if input.len() <= 1 {
        return MergeNode {
            array: input.to_vec(),
            left: None,
            right: None,
        };
    }
    let mid = input.len() / 2;
    MergeNode {
        array: input.to_vec(),
        left: Some(Box::new(build_merge_tree(&input[..mid]))),
        right: Some(Box::new(build_merge_tree(&input[mid..]))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bisection_is_floor_left() {
        let tree = build_merge_tree(&[1, 2, 3]);
        let left = tree.left.as_ref().unwrap();
        let right = tree.right.as_ref().unwrap();
        assert_eq!(left.array, vec![1]);
        assert_eq!(right.array, vec![2, 3]);
    }

    #[test]
    fn four_elements_make_a_perfect_tree() {
        let tree = build_merge_tree(&[38, 27, 43, 3]);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.left.as_ref().unwrap().array, vec![38, 27]);
        assert_eq!(tree.right.as_ref().unwrap().array, vec![43, 3]);
    }

    #[test]
    fn empty_input_is_a_single_empty_leaf() {
        let tree = build_merge_tree(&[]);
        assert!(tree.is_leaf());
        assert!(tree.array.is_empty());
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn leaves_serialize_without_child_keys() {
        let leaf = build_merge_tree(&[5]);
        let json = serde_json::to_string(&leaf).unwrap();
        assert_eq!(json, r#"{"array":[5]}"#);

        let node = build_merge_tree(&[5, 4]);
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains(r#""left":{"array":[5]}"#));
        assert!(json.contains(r#""right":{"array":[4]}"#));
    }
}
