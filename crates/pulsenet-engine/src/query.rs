//! Query drivers built on the cycle engine.
//!
//! - [`count_pulses`]: run a fixed number of presses and total the pulses
//!   by level.
//! - [`first_convergence`]: find, for every input of a target conjunction,
//!   the first press on which it sends high to the target, and combine the
//!   indices with a least common multiple.
//! - [`first_low_press`]: the same, with the target located as the single
//!   module feeding a named sink.
//!
//! Both drivers run on whatever state the engine already holds. Build a
//! fresh network from the blueprint when independent starting state is
//! needed.

use indexmap::IndexMap;
use pulsenet_core::{CycleError, ModuleId, NetworkError, Pulse, QueryError};
use tracing::{debug, info};

use crate::cycle::CycleEngine;

// ── Aggregate counter ──────────────────────────────────────────────

/// Pulse totals over a run of presses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PulseTotals {
    /// Low pulses observed.
    pub low: u64,
    /// High pulses observed.
    pub high: u64,
}

impl PulseTotals {
    /// `low * high`, widened so it cannot overflow.
    pub fn product(&self) -> u128 {
        self.low as u128 * self.high as u128
    }

    /// `low + high`.
    pub fn total(&self) -> u64 {
        self.low + self.high
    }
}

/// Press the button `presses` times and count every observed pulse.
///
/// The button pulse and pulses into unmodeled sinks are counted too.
pub fn count_pulses(engine: &mut CycleEngine, presses: u64) -> Result<PulseTotals, CycleError> {
    let mut totals = PulseTotals::default();
    for _ in 0..presses {
        engine.press(&mut |pulse: &Pulse| {
            if pulse.level.is_high() {
                totals.high += 1;
            } else {
                totals.low += 1;
            }
        })?;
    }
    debug!(presses, low = totals.low, high = totals.high, "pulse count complete");
    Ok(totals)
}

// ── Convergence detector ───────────────────────────────────────────

/// Result of a convergence query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Convergence {
    /// The target conjunction.
    pub target: ModuleId,
    /// Each tracked input with the first press (1-indexed, counted from the
    /// start of the query) on which it sent high to the target. Inputs are
    /// in tracking order.
    pub first_high: Vec<(ModuleId, u64)>,
    /// Least common multiple of the first-high presses.
    pub press: u64,
}

/// Greatest common divisor.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, or `None` on overflow. `lcm(0, x)` is 0.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Least common multiple of every value; 1 for an empty input.
pub fn lcm_all<I: IntoIterator<Item = u64>>(values: I) -> Option<u64> {
    values.into_iter().try_fold(1, lcm)
}

/// First press on which `target` would receive all-high inputs at once.
///
/// Presses until every input tracked by the `target` conjunction has sent
/// it at least one high pulse, then returns the LCM of those first presses.
///
/// This is a structural shortcut, not a general answer. It is correct only
/// when each input's high pulses to `target` are exactly periodic, with
/// period equal to its first-high press and no phase offset. Networks built
/// from independent flip-flop counters, one per input, have that property;
/// arbitrary feedback networks do not, and no closed form exists for them.
/// Run it on a freshly built network: first-high presses are counted from
/// the start of this call.
///
/// # Errors
///
/// - [`QueryError::Network`] if `target` is unknown, not a conjunction, or
///   tracks no inputs.
/// - [`QueryError::Cycle`] if a press fails.
/// - [`QueryError::NotConverged`] if `press_budget` presses pass first.
/// - [`QueryError::Overflow`] if the LCM does not fit in a `u64`.
pub fn first_convergence(engine: &mut CycleEngine, target: &str) -> Result<Convergence, QueryError> {
    let (target_id, conj) = engine.network().conjunction(target)?;
    if conj.input_count() == 0 {
        return Err(NetworkError::EmptyConjunction {
            name: target.to_string(),
        }
        .into());
    }
    let mut first: IndexMap<ModuleId, Option<u64>> = conj.inputs().map(|id| (id, None)).collect();
    let mut pending = first.len();

    if engine.presses() > 0 {
        debug!(
            conjunction = target,
            presses = engine.presses(),
            "convergence query on a network that has already been pressed"
        );
    }

    let budget = engine.config().press_budget;
    let mut offset = 0;
    while pending > 0 {
        if offset == budget {
            return Err(QueryError::NotConverged {
                presses: offset,
                pending,
            });
        }
        offset += 1;
        engine.press(&mut |pulse: &Pulse| {
            if pulse.to != target_id || !pulse.level.is_high() {
                return;
            }
            if let Some(slot) = first.get_mut(&pulse.from) {
                if slot.is_none() {
                    *slot = Some(offset);
                    pending -= 1;
                }
            }
        })?;
    }

    let first_high: Vec<(ModuleId, u64)> = first
        .into_iter()
        .filter_map(|(id, press)| press.map(|p| (id, p)))
        .collect();
    let press = lcm_all(first_high.iter().map(|&(_, p)| p)).ok_or(QueryError::Overflow)?;

    info!(
        conjunction = target,
        inputs = first_high.len(),
        presses_run = offset,
        press,
        "convergence found"
    );
    Ok(Convergence {
        target: target_id,
        first_high,
        press,
    })
}

/// First press on which `sink` would receive a low pulse.
///
/// Locates the single module feeding `sink` and runs
/// [`first_convergence`] on it, under the same periodicity assumption.
pub fn first_low_press(engine: &mut CycleEngine, sink: &str) -> Result<Convergence, QueryError> {
    let network = engine.network();
    let sink_id = network.id(sink).ok_or_else(|| NetworkError::UnknownModule {
        name: sink.to_string(),
    })?;
    let target = match network.predecessors(sink_id).as_slice() {
        [single] => network.name(*single).unwrap_or_default().to_string(),
        others => {
            return Err(NetworkError::NoSinglePredecessor {
                sink: sink.to_string(),
                found: others.len(),
            }
            .into())
        }
    };
    first_convergence(engine, &target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use pulsenet_network::Blueprint;
    use pulsenet_test_utils::fixtures::{counter_branches, CONVERGENCE_SINK, CONVERGENCE_TARGET};
    use pulsenet_test_utils::{EMPTY_TARGET, SCENARIO_A, SCENARIO_B};

    fn engine(text: &str) -> CycleEngine {
        let bp: Blueprint = text.parse().unwrap();
        CycleEngine::with_defaults(bp.build().unwrap())
    }

    #[test]
    fn gcd_and_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(lcm(4, 6), Some(12));
        assert_eq!(lcm(0, 6), Some(0));
        assert_eq!(lcm_all([3, 5, 7]), Some(105));
        assert_eq!(lcm_all([9, 15]), Some(45));
        assert_eq!(lcm_all(std::iter::empty()), Some(1));
        assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
    }

    #[test]
    fn single_press_totals() {
        let mut e = engine(SCENARIO_A);
        let totals = count_pulses(&mut e, 1).unwrap();
        assert_eq!(totals, PulseTotals { low: 8, high: 4 });
        assert_eq!(totals.total(), 12);
    }

    #[test]
    fn zero_presses_count_nothing() {
        let mut e = engine(SCENARIO_B);
        assert_eq!(count_pulses(&mut e, 0).unwrap(), PulseTotals::default());
        assert_eq!(e.presses(), 0);
    }

    #[test]
    fn convergence_on_coprime_periods() {
        let mut e = engine(&counter_branches(&[3, 5, 7]));
        let c = first_convergence(&mut e, CONVERGENCE_TARGET).unwrap();
        let periods: Vec<u64> = c.first_high.iter().map(|&(_, p)| p).collect();
        assert_eq!(periods, vec![3, 5, 7]);
        assert_eq!(c.press, 105);
        assert_eq!(e.presses(), 7);
    }

    #[test]
    fn convergence_on_shared_factors() {
        let mut e = engine(&counter_branches(&[9, 15]));
        let c = first_convergence(&mut e, CONVERGENCE_TARGET).unwrap();
        assert_eq!(c.press, 45);
    }

    #[test]
    fn first_low_press_finds_target_through_sink() {
        let mut e = engine(&counter_branches(&[3, 5, 7]));
        let c = first_low_press(&mut e, CONVERGENCE_SINK).unwrap();
        assert_eq!(Some(c.target), e.network().id(CONVERGENCE_TARGET));
        assert_eq!(c.press, 105);
    }

    #[test]
    fn empty_conjunction_target_is_malformed() {
        let mut e = engine(EMPTY_TARGET);
        assert_eq!(
            first_convergence(&mut e, "lonely").unwrap_err(),
            QueryError::Network(NetworkError::EmptyConjunction {
                name: "lonely".into()
            })
        );
        assert_eq!(e.presses(), 0);
    }

    #[test]
    fn non_conjunction_target_rejected() {
        let mut e = engine(SCENARIO_A);
        assert!(matches!(
            first_convergence(&mut e, "a"),
            Err(QueryError::Network(NetworkError::NotAConjunction { .. }))
        ));
    }

    #[test]
    fn sink_with_many_feeders_rejected() {
        let mut e = engine(EMPTY_TARGET);
        assert_eq!(
            first_low_press(&mut e, "out").unwrap_err(),
            QueryError::Network(NetworkError::NoSinglePredecessor {
                sink: "out".into(),
                found: 2,
            })
        );
    }

    #[test]
    fn press_budget_bounds_the_search() {
        let bp: Blueprint = counter_branches(&[3, 7]).parse().unwrap();
        let config = EngineConfig {
            press_budget: 5,
            ..EngineConfig::default()
        };
        let mut e = CycleEngine::new(bp.build().unwrap(), config).unwrap();
        assert_eq!(
            first_convergence(&mut e, CONVERGENCE_TARGET).unwrap_err(),
            QueryError::NotConverged {
                presses: 5,
                pending: 1
            }
        );
    }
}
