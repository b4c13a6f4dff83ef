#![cfg(test)]
#![allow(clippy::missing_docs_in_private_items, clippy::indexing_slicing)]

// Property tests for BiMap kept inside the crate next to the unit tests.
// A pair of std HashMaps (forward and backward) serves as the model; the
// mirror invariant is re-checked against the model after every operation.

use crate::BiMap;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys and values, pools shrink in length, and op lists shrink in length.
// Small pools force plenty of duplicate-key and duplicate-value attempts.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, usize),
    RemoveKey(usize),
    RemoveValue(usize),
    GetValue(usize),
    GetKey(usize),
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<i32>, Vec<Op>)> {
    let pools = (
        proptest::collection::vec("[a-z]{1,4}", 1..=6),
        proptest::collection::vec(any::<i32>(), 1..=6),
    );
    pools.prop_flat_map(|(keys, vals)| {
        let kidxs: Vec<usize> = (0..keys.len()).collect();
        let vidxs: Vec<usize> = (0..vals.len()).collect();
        let kidx = proptest::sample::select(kidxs);
        let vidx = proptest::sample::select(vidxs);
        let op = prop_oneof![
            4 => (kidx.clone(), vidx.clone()).prop_map(|(k, v)| Op::Insert(k, v)),
            2 => kidx.clone().prop_map(Op::RemoveKey),
            2 => vidx.clone().prop_map(Op::RemoveValue),
            2 => kidx.clone().prop_map(Op::GetValue),
            2 => vidx.clone().prop_map(Op::GetKey),
            1 => Just(Op::Clear),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (keys.clone(), vals.clone(), ops))
    })
}

// Drives `sut` and the model through the operation list, asserting result
// parity on every call and the mirror invariant after every call.
fn run_scenario(
    mut sut: BiMap<String, i32>,
    keys: &[String],
    vals: &[i32],
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut forward: HashMap<String, i32> = HashMap::new();
    let mut backward: HashMap<i32, String> = HashMap::new();

    for op in ops {
        match op {
            Op::Insert(ki, vi) => {
                let (k, v) = (&keys[ki], vals[vi]);
                let free = !forward.contains_key(k) && !backward.contains_key(&v);
                prop_assert_eq!(
                    sut.insert(k.clone(), v),
                    free,
                    "insert must succeed iff both sides are unbound"
                );
                if free {
                    forward.insert(k.clone(), v);
                    backward.insert(v, k.clone());
                }
            }
            Op::RemoveKey(ki) => {
                let k = &keys[ki];
                let present = forward.contains_key(k);
                prop_assert_eq!(sut.remove_key(k.as_str()), present);
                if let Some(v) = forward.remove(k) {
                    backward.remove(&v);
                }
            }
            Op::RemoveValue(vi) => {
                let v = vals[vi];
                let present = backward.contains_key(&v);
                prop_assert_eq!(sut.remove_value(&v), present);
                if let Some(k) = backward.remove(&v) {
                    forward.remove(&k);
                }
            }
            Op::GetValue(ki) => {
                let k = &keys[ki];
                prop_assert_eq!(sut.get_value(k.as_str()).ok(), forward.get(k));
            }
            Op::GetKey(vi) => {
                let v = vals[vi];
                prop_assert_eq!(sut.get_key(&v).ok(), backward.get(&v));
            }
            Op::Clear => {
                sut.clear();
                forward.clear();
                backward.clear();
            }
        }

        // Post-conditions after each op
        // 1) Size parity with the model
        prop_assert_eq!(sut.len(), forward.len());
        prop_assert_eq!(sut.is_empty(), forward.is_empty());
        // 2) Mirror invariant: every model pair resolves both ways
        for (k, v) in &forward {
            prop_assert_eq!(sut.get_value(k.as_str()), Ok(v));
            prop_assert_eq!(sut.get_key(v), Ok(k));
        }
        // 3) Containment parity over the whole pools, absent entries included
        for k in keys {
            prop_assert_eq!(sut.contains_key(k.as_str()), forward.contains_key(k));
        }
        for v in vals {
            prop_assert_eq!(sut.contains_value(v), backward.contains_key(v));
        }
    }
    Ok(())
}

// Property: State-machine equivalence against a two-HashMap model.
// Invariants exercised across random operation sequences:
// - Inserts succeed exactly when neither the key nor the value is bound.
// - remove_key/remove_value drop the pair from both sides or no-op.
// - get_value/get_key parity with the model, present and absent.
// - len/is_empty parity and the mirror invariant after every op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((keys, vals, ops) in arb_scenario()) {
        run_scenario(BiMap::new(), &keys, &vals, ops)?;
    }
}

// Property: Same invariants starting from the smallest possible tables,
// so the sequences drive both inner tables through repeated rehashes and
// exercise tombstone handling across growth.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_tiny_capacity((keys, vals, ops) in arb_scenario()) {
        run_scenario(BiMap::with_capacity(1), &keys, &vals, ops)?;
    }
}
