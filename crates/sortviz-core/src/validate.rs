//! Trace invariant checker.
//!
//! - [`Validator`]: fallible, production-friendly checker (returns `Result`)
//! - [`TraceReport`]: summary handed back on success
//!
//! The checks are the engine's published contract, enforced on stored
//! traces: constant snapshot length, in-bounds annotations, ascending
//! sorted sets, a cumulative sorted set for Quick Sort, and (optionally)
//! a fully sorted final state. A trace that passes is safe for any player
//! to consume blindly.

use crate::algorithm::Algorithm;
use crate::format::{TraceFile, TRACE_VERSION};
use anyhow::{ensure, Result};
use std::fmt;

/// Optional knobs for validation; extend as needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateConfig {
    /// If true, require a non-empty trace to end fully sorted with every
    /// index marked. Leave off to accept prefixes captured mid-run.
    pub check_final: bool,
}

/// Summary of a successfully validated trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceReport {
    /// Number of steps scanned.
    pub steps: usize,
    /// Element count of the traced input.
    pub len: usize,
}

impl fmt::Display for TraceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} steps over {} elements", self.steps, self.len)
    }
}

/// Fallible trace checker.
#[derive(Debug, Default, Clone, Copy)]
pub struct Validator {
    /// Configuration toggles for validation behavior.
    pub cfg: ValidateConfig,
}

impl Validator {
    /// Construct a default validator (structural checks only).
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: ValidateConfig::default(),
        }
    }

    /// Construct a validator that additionally checks the final state.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            cfg: ValidateConfig { check_final: true },
        }
    }

    /// Validate a stored trace against the engine contract.
    ///
    /// We:
    ///   - check the envelope version,
    ///   - require the first snapshot to equal the embedded input,
    ///   - scan every step for length conservation and annotation bounds,
    ///   - require each sorted set to be strictly ascending,
    ///   - for Quick Sort, require the sorted set to grow monotonically,
    ///   - with [`ValidateConfig::check_final`], require the last step to be
    ///     the fully sorted input with every index marked.
    ///
    /// # Errors
    /// Returns an error naming the first offending step and field.
    pub fn validate(&self, tf: &TraceFile) -> Result<TraceReport> {
        ensure!(
            tf.version == TRACE_VERSION,
            "unsupported trace version {} (expected {})",
            tf.version,
            TRACE_VERSION
        );

        let n = tf.input.len();

        if tf.steps.is_empty() {
            // Counting Sort legitimately emits nothing for an empty input;
            // every other generator emits at least one step.
            ensure!(
                n == 0,
                "empty step list for a non-empty input of {n} elements"
            );
            return Ok(TraceReport { steps: 0, len: 0 });
        }

        // Generators snapshot before mutating, so step 0 shows the input.
        let first = &tf.steps[0];
        ensure!(
            first.array == tf.input,
            "step 0 snapshot does not match the embedded input"
        );

        let mut prev_sorted: Option<Vec<usize>> = None;
        for (i, step) in tf.steps.iter().enumerate() {
            ensure!(
                step.array.len() == n,
                "step {}: snapshot length {} != input length {}",
                i,
                step.array.len(),
                n
            );
            for idx in step.annotated_indices() {
                ensure!(
                    idx < n,
                    "step {}: annotation index {} out of bounds for length {}",
                    i,
                    idx,
                    n
                );
            }
            if let Some(s) = &step.sorted {
                ensure!(
                    s.windows(2).all(|w| w[0] < w[1]),
                    "step {}: sorted set is not strictly ascending",
                    i
                );
                if tf.algorithm == Algorithm::Quick {
                    if let Some(prev) = &prev_sorted {
                        ensure!(
                            is_superset(s, prev),
                            "step {}: sorted set shrank (quick sort sets are cumulative)",
                            i
                        );
                    }
                    prev_sorted = Some(s.clone());
                }
            }
        }

        if self.cfg.check_final {
            self.check_final_step(tf, n)?;
        }

        Ok(TraceReport {
            steps: tf.steps.len(),
            len: n,
        })
    }

    fn check_final_step(&self, tf: &TraceFile, n: usize) -> Result<()> {
        let last_idx = tf.steps.len() - 1;
        let last = &tf.steps[last_idx];

        let mut expect = tf.input.clone();
        expect.sort_unstable();
        ensure!(
            last.array == expect,
            "step {last_idx}: final snapshot is not the sorted input"
        );

        // Empty-input traces from Radix/Bucket end on a bare snapshot.
        if n > 0 {
            let full: Vec<usize> = (0..n).collect();
            ensure!(
                last.sorted.as_deref() == Some(&full[..]),
                "step {last_idx}: final step does not mark all {n} indices sorted"
            );
        }
        Ok(())
    }
}

/// `true` if every element of `sub` appears in the ascending slice `sup`.
fn is_superset(sup: &[usize], sub: &[usize]) -> bool {
    sub.iter().all(|x| sup.binary_search(x).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Step;

    fn ok_trace() -> TraceFile {
        let steps = vec![
            Step {
                compared: Some([0, 1]),
                sorted: Some(vec![]),
                ..Step::snapshot(&[2, 1])
            },
            Step {
                swapped: Some([0, 1]),
                sorted: Some(vec![]),
                ..Step::snapshot(&[1, 2])
            },
            Step {
                sorted: Some(vec![0, 1]),
                ..Step::snapshot(&[1, 2])
            },
        ];
        TraceFile::new(Algorithm::Bubble, vec![2, 1], steps)
    }

    #[test]
    fn valid_trace_passes_strict() {
        let report = Validator::strict().validate(&ok_trace()).unwrap();
        assert_eq!(report, TraceReport { steps: 3, len: 2 });
    }

    #[test]
    fn length_change_is_rejected() {
        let mut tf = ok_trace();
        tf.steps[1].array.push(9);
        let err = Validator::new().validate(&tf).unwrap_err();
        assert!(err.to_string().contains("snapshot length"));
    }

    #[test]
    fn out_of_bounds_annotation_is_rejected() {
        let mut tf = ok_trace();
        tf.steps[0].compared = Some([0, 7]);
        let err = Validator::new().validate(&tf).unwrap_err();
        assert!(err.to_string().contains("out of bounds"));
    }

    #[test]
    fn shrinking_quick_set_is_rejected() {
        let steps = vec![
            Step {
                sorted: Some(vec![1, 3]),
                ..Step::snapshot(&[1, 2, 3, 4])
            },
            Step {
                sorted: Some(vec![1]),
                ..Step::snapshot(&[1, 2, 3, 4])
            },
        ];
        let tf = TraceFile::new(Algorithm::Quick, vec![1, 2, 3, 4], steps);
        let err = Validator::new().validate(&tf).unwrap_err();
        assert!(err.to_string().contains("cumulative"));
    }

    #[test]
    fn unsorted_final_state_fails_only_strict() {
        let steps = vec![Step {
            sorted: Some(vec![0, 1]),
            ..Step::snapshot(&[2, 1])
        }];
        let tf = TraceFile::new(Algorithm::Bubble, vec![2, 1], steps);
        assert!(Validator::new().validate(&tf).is_ok());
        let err = Validator::strict().validate(&tf).unwrap_err();
        assert!(err.to_string().contains("not the sorted input"));
    }

    #[test]
    fn empty_steps_require_empty_input() {
        let tf = TraceFile::new(Algorithm::Counting, vec![], vec![]);
        assert!(Validator::strict().validate(&tf).is_ok());

        let bad = TraceFile::new(Algorithm::Counting, vec![1], vec![]);
        assert!(Validator::new().validate(&bad).is_err());
    }
}
