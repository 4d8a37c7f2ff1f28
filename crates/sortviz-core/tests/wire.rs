//! Wire-contract checks on the serialized step/trace shapes.
//!
//! These tests treat:
//! - the **JSON and CBOR codecs** as exact inverses on every representable
//!   `Step` and `TraceFile`, and
//! - the **camelCase, absent-when-`None` key layout** as a stable surface
//!   players can consume without null handling.

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use sortviz_core::{from_cbor, to_cbor, Algorithm, IndexPair, Step, TraceFile};

/// JSON keys `step` should serialize: `array` plus the set annotations,
/// under their wire names.
fn expected_keys(step: &Step) -> Vec<&'static str> {
    let mut keys = vec!["array"];
    if step.compared.is_some() {
        keys.push("compared");
    }
    if step.swapped.is_some() {
        keys.push("swapped");
    }
    if step.shifting.is_some() {
        keys.push("shifting");
    }
    if step.shifted.is_some() {
        keys.push("shifted");
    }
    if step.key.is_some() {
        keys.push("key");
    }
    if step.inserted.is_some() {
        keys.push("inserted");
    }
    if step.sorted.is_some() {
        keys.push("sorted");
    }
    if step.pivot.is_some() {
        keys.push("pivot");
    }
    if step.left.is_some() {
        keys.push("left");
    }
    if step.right.is_some() {
        keys.push("right");
    }
    if step.active_range.is_some() {
        keys.push("activeRange");
    }
    if step.merged_range.is_some() {
        keys.push("mergedRange");
    }
    keys.sort_unstable();
    keys
}

/// Sorted key list of a step's JSON object form.
fn json_keys(step: &Step) -> Vec<String> {
    let json = serde_json::to_value(step).unwrap();
    let mut keys: Vec<String> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort_unstable();
    keys
}

/// A step with every annotation set serializes all thirteen keys.
#[test]
fn fully_annotated_step_serializes_every_key() {
    let step = Step {
        compared: Some([0, 1]),
        swapped: Some([1, 2]),
        shifting: Some([2, 3]),
        shifted: Some([3, 2]),
        key: Some(4),
        inserted: Some(5),
        sorted: Some(vec![0, 1, 2]),
        pivot: Some(6),
        left: Some(0),
        right: Some(7),
        active_range: Some([0, 7]),
        merged_range: Some([0, 3]),
        ..Step::snapshot(&[8, 7, 6, 5, 4, 3, 2, 1])
    };
    let keys = json_keys(&step);
    assert_eq!(keys.len(), 13);
    assert_eq!(keys, expected_keys(&step));
}

/// Hand-written player-shaped JSON decodes into the envelope, including a
/// null metadata slot and missing annotation fields.
#[test]
fn player_shaped_json_decodes() {
    let raw = r#"{
        "version": 1,
        "algorithm": "merge",
        "input": [4, 2],
        "steps": [
            { "array": [4, 2], "activeRange": [0, 1] },
            { "array": [2, 4], "mergedRange": [0, 1], "sorted": [0, 1] }
        ],
        "meta": null
    }"#;
    let tf: TraceFile = serde_json::from_str(raw).unwrap();
    assert_eq!(tf.algorithm, Algorithm::Merge);
    assert_eq!(tf.steps[0].active_range, Some([0, 1]));
    assert_eq!(tf.steps[0].merged_range, None);
    assert_eq!(tf.steps[1].sorted, Some(vec![0, 1]));
    assert!(tf.meta.is_none());
}

// Keep CI predictable while still exercising a wide range.
prop_compose! {
    fn arb_pair()(a in 0usize..24, b in 0usize..24) -> IndexPair {
        [a, b]
    }
}

// Annotations here may point outside the snapshot; the codecs must not care
// (bounds are the validator's job, not the wire's).
prop_compose! {
    fn arb_step()(
        array in vec(-999i64..=999, 0..=12),
        (compared, swapped, shifting, shifted) in (
            option::of(arb_pair()),
            option::of(arb_pair()),
            option::of(arb_pair()),
            option::of(arb_pair()),
        ),
        (key, inserted, pivot, left, right) in (
            option::of(0usize..24),
            option::of(0usize..24),
            option::of(0usize..24),
            option::of(0usize..24),
            option::of(0usize..24),
        ),
        sorted in option::of(vec(0usize..24, 0..=8)),
        (active_range, merged_range) in (option::of(arb_pair()), option::of(arb_pair())),
    ) -> Step {
        Step {
            array,
            compared,
            swapped,
            shifting,
            shifted,
            key,
            inserted,
            sorted,
            pivot,
            left,
            right,
            active_range,
            merged_range,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64, // good CI/runtime balance
        .. ProptestConfig::default()
    })]

    // Property: both codecs decode back to the exact step they encoded.
    #[test]
    fn step_roundtrips_through_both_codecs(step in arb_step()) {
        let json = serde_json::to_string(&step).unwrap();
        let back: Step = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&back, &step);

        let bytes = to_cbor(&step).unwrap();
        let back: Step = from_cbor(&bytes).unwrap();
        prop_assert_eq!(back, step);
    }

    // Property: unset annotations never appear on the wire, set ones always
    // do, and only under their camelCase names.
    #[test]
    fn absent_annotations_stay_off_the_wire(step in arb_step()) {
        prop_assert_eq!(json_keys(&step), expected_keys(&step));
    }

    // Property: the envelope survives both codecs with version, input, and
    // metadata intact.
    #[test]
    fn trace_file_roundtrips_through_both_codecs(
        pick in 0usize..Algorithm::ALL.len(),
        input in vec(-999i64..=999, 0..=8),
        steps in vec(arb_step(), 0..=6),
        seed in option::of(0u64..1_000_000),
    ) {
        let mut tf = TraceFile::new(Algorithm::ALL[pick], input, steps);
        tf.meta = seed.map(|s| serde_json::json!({ "seed": s }));

        let json = serde_json::to_string(&tf).unwrap();
        let back: TraceFile = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&back, &tf);

        let bytes = to_cbor(&tf).unwrap();
        let back: TraceFile = from_cbor(&bytes).unwrap();
        prop_assert_eq!(back, tf);
    }
}

/// Negative test: truncated CBOR errors instead of decoding a mangled trace.
#[test]
fn truncated_cbor_is_rejected() {
    let tf = TraceFile::new(
        Algorithm::Bubble,
        vec![2, 1],
        vec![Step::snapshot(&[2, 1]), Step::snapshot(&[1, 2])],
    );
    let mut bytes = to_cbor(&tf).unwrap();
    bytes.truncate(bytes.len() / 2);
    assert!(from_cbor::<TraceFile>(&bytes).is_err());
}
