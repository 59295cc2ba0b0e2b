//! Integration test: determinism across independently built networks.
//!
//! Two networks built from the same blueprint and pressed the same number
//! of times must produce identical totals and identical pulse traces.

use proptest::prelude::*;
use pulsenet_engine::{count_pulses, CycleEngine, PulseTrace, TraceHasher};
use pulsenet_network::Blueprint;
use pulsenet_test_utils::{counter_branches, SCENARIO_A, SCENARIO_B};

fn hash_run(bp: &Blueprint, presses: u64) -> u64 {
    let mut e = CycleEngine::with_defaults(bp.build().unwrap());
    let mut hasher = TraceHasher::new();
    for _ in 0..presses {
        e.press(&mut hasher).unwrap();
    }
    hasher.finish()
}

#[test]
fn fresh_networks_agree_on_totals() {
    for text in [SCENARIO_A, SCENARIO_B] {
        let bp: Blueprint = text.parse().unwrap();
        let mut a = CycleEngine::with_defaults(bp.build().unwrap());
        let mut b = CycleEngine::with_defaults(bp.build().unwrap());
        assert_eq!(
            count_pulses(&mut a, 250).unwrap(),
            count_pulses(&mut b, 250).unwrap()
        );
    }
}

#[test]
fn fresh_networks_agree_on_traces() {
    let bp: Blueprint = SCENARIO_B.parse().unwrap();
    let mut a = CycleEngine::with_defaults(bp.build().unwrap());
    let mut b = CycleEngine::with_defaults(bp.build().unwrap());
    let mut ta = PulseTrace::new();
    let mut tb = PulseTrace::new();
    for _ in 0..20 {
        a.press(&mut ta).unwrap();
        b.press(&mut tb).unwrap();
    }
    assert_eq!(ta, tb);
    assert_eq!(ta.hash(), hash_run(&bp, 20));
}

#[test]
fn state_carries_over_between_presses() {
    // State carries over: a network pressed once more than another
    // produces a different trace for the next press.
    let bp: Blueprint = SCENARIO_A.parse().unwrap();
    let mut ahead = CycleEngine::with_defaults(bp.build().unwrap());
    ahead.press_silent().unwrap();
    let mut fresh = CycleEngine::with_defaults(bp.build().unwrap());

    let mut ta = PulseTrace::new();
    let mut tf = PulseTrace::new();
    ahead.press(&mut ta).unwrap();
    fresh.press(&mut tf).unwrap();
    // Scenario A returns to its initial state after every press.
    assert_eq!(ta, tf);

    let bp: Blueprint = SCENARIO_B.parse().unwrap();
    let mut ahead = CycleEngine::with_defaults(bp.build().unwrap());
    ahead.press_silent().unwrap();
    let mut fresh = CycleEngine::with_defaults(bp.build().unwrap());
    let mut ta = PulseTrace::new();
    let mut tf = PulseTrace::new();
    ahead.press(&mut ta).unwrap();
    fresh.press(&mut tf).unwrap();
    assert_ne!(ta, tf);
}

fn arb_periods() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec((0u64..16).prop_map(|k| 2 * k + 1), 1..4)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn generated_networks_are_deterministic(periods in arb_periods(), presses in 1u64..40) {
        let bp: Blueprint = counter_branches(&periods).parse().unwrap();
        prop_assert_eq!(hash_run(&bp, presses), hash_run(&bp, presses));
    }
}
