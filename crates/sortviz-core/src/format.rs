//! Versioned on-disk envelope for a generated trace.
//!
//! Generators hand back bare `Vec<Step>`; the envelope exists for the file
//! boundary, pairing the steps with the algorithm id and the exact input so
//! a player (or the validator) needs nothing else.

use crate::algorithm::Algorithm;
use crate::types::{Step, Value};
use serde::{Deserialize, Serialize};

/// Current trace wire version.
pub const TRACE_VERSION: u16 = 1;

/// A complete stored trace.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraceFile {
    /// Format/version tag for forward-compat.
    pub version: u16,
    /// Algorithm that produced the steps.
    pub algorithm: Algorithm,
    /// The exact input array the generator was given.
    pub input: Vec<Value>,
    /// Step sequence, in emission order.
    pub steps: Vec<Step>,
    /// Optional metadata (seed, generator build, timings…).
    pub meta: Option<serde_json::Value>,
}

impl TraceFile {
    /// Wrap freshly generated steps in a current-version envelope.
    #[inline]
    #[must_use]
    pub fn new(algorithm: Algorithm, input: Vec<Value>, steps: Vec<Step>) -> Self {
        Self {
            version: TRACE_VERSION,
            algorithm,
            input,
            steps,
            meta: None,
        }
    }

    /// Number of steps.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace has no steps (legal only for Counting Sort on
    /// empty input).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Snapshot of the last step, if any.
    #[inline]
    #[must_use]
    pub fn final_array(&self) -> Option<&[Value]> {
        self.steps.last().map(|s| s.array.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Step;

    #[test]
    fn envelope_carries_version_and_input() {
        let steps = vec![Step::snapshot(&[2, 1]), Step::snapshot(&[1, 2])];
        let tf = TraceFile::new(Algorithm::Bubble, vec![2, 1], steps);
        assert_eq!(tf.version, TRACE_VERSION);
        assert_eq!(tf.len(), 2);
        assert_eq!(tf.final_array(), Some(&[1, 2][..]));

        let json = serde_json::to_string(&tf).unwrap();
        let back: TraceFile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tf);
    }
}
