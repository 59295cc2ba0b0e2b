//! Reusable network descriptions.
//!
//! - [`SCENARIO_A`], [`SCENARIO_B`]: the two small reference networks with
//!   known aggregate pulse counts.
//! - [`counter_branches`]: a generator for convergence networks whose
//!   target inputs fire high with known, exact periods.

use std::fmt::Write;

/// Three flip-flops in a chain closed by an inverter.
///
/// 1000 presses observe 8000 low and 4000 high pulses.
pub const SCENARIO_A: &str = "\
broadcaster -> a, b, c
%a -> b
%b -> c
%c -> inv
&inv -> a
";

/// A two-bit loop feeding a conjunction that drives the sink `output`.
///
/// 1000 presses observe 4250 low and 2750 high pulses.
pub const SCENARIO_B: &str = "\
broadcaster -> a
%a -> inv, con
&inv -> b
%b -> con
&con -> output
";

/// A conjunction that tracks no inputs (nothing points at `lonely`).
pub const EMPTY_TARGET: &str = "\
broadcaster -> a
%a -> out
&lonely -> out
";

/// Name of the conjunction fed by every branch of [`counter_branches`].
pub const CONVERGENCE_TARGET: &str = "tgt";

/// Name of the sink fed by [`CONVERGENCE_TARGET`].
pub const CONVERGENCE_SINK: &str = "rx";

/// Name of the inverter at the end of branch `branch`.
pub fn branch_output(branch: usize) -> String {
    format!("b{branch}out")
}

/// Build a network of independent flip-flop counters, one per period.
///
/// Branch `b` is a ripple counter `b{b}f0 .. b{b}f{n-1}` with `n` the bit
/// length of its period `p`. The hub conjunction `b{b}hub` watches the
/// flip-flops whose bit is set in `p`. When the count reaches `p` the hub
/// emits low, which sets every clear bit and bumps bit 0, rolling the
/// counter over to zero within the same press. The hub also feeds the
/// inverter `b{b}out`, so `b{b}out` sends high to [`CONVERGENCE_TARGET`]
/// on exactly the presses that are multiples of `p`.
///
/// # Panics
///
/// Panics if any period is even or zero. The rollover relies on bit 0
/// being one of the watched bits.
pub fn counter_branches(periods: &[u64]) -> String {
    let mut out = String::new();
    let entries: Vec<String> = (0..periods.len()).map(|b| format!("b{b}f0")).collect();
    let _ = writeln!(out, "broadcaster -> {}", entries.join(", "));

    for (b, &p) in periods.iter().enumerate() {
        assert!(p % 2 == 1, "period {p} must be odd");
        let bits = (u64::BITS - p.leading_zeros()) as usize;
        let hub = format!("b{b}hub");
        let mut hub_dests = Vec::new();

        for i in 0..bits {
            let mut dests = Vec::new();
            if i + 1 < bits {
                dests.push(format!("b{b}f{}", i + 1));
            }
            if p & (1 << i) != 0 {
                dests.push(hub.clone());
            } else {
                hub_dests.push(format!("b{b}f{i}"));
            }
            let _ = writeln!(out, "%b{b}f{i} -> {}", dests.join(", "));
        }

        hub_dests.push(format!("b{b}f0"));
        hub_dests.push(branch_output(b));
        let _ = writeln!(out, "&{hub} -> {}", hub_dests.join(", "));
        let _ = writeln!(out, "&{} -> {CONVERGENCE_TARGET}", branch_output(b));
    }

    let _ = writeln!(out, "&{CONVERGENCE_TARGET} -> {CONVERGENCE_SINK}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_three_layout() {
        let text = counter_branches(&[3]);
        let expected = "\
broadcaster -> b0f0
%b0f0 -> b0f1, b0hub
%b0f1 -> b0hub
&b0hub -> b0f0, b0out
&b0out -> tgt
&tgt -> rx
";
        assert_eq!(text, expected);
    }

    #[test]
    fn clear_bits_are_reset_by_the_hub() {
        // 5 = 0b101: bit 1 is clear.
        let text = counter_branches(&[5]);
        assert!(text.contains("%b0f1 -> b0f2\n"));
        assert!(text.contains("&b0hub -> b0f1, b0f0, b0out\n"));
    }

    #[test]
    fn one_broadcaster_line_per_network() {
        let text = counter_branches(&[3, 5, 7]);
        assert_eq!(text.lines().filter(|l| l.starts_with("broadcaster")).count(), 1);
        assert!(text.starts_with("broadcaster -> b0f0, b1f0, b2f0\n"));
    }

    #[test]
    #[should_panic(expected = "must be odd")]
    fn even_period_rejected() {
        counter_branches(&[4]);
    }
}
