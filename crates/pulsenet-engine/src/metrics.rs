//! Per-press metrics for the cycle engine.
//!
//! [`CycleMetrics`] captures pulse counts and timing for a single press.

use pulsenet_core::Pulse;

/// Counts and timing collected during a single press.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleMetrics {
    /// 1-indexed press this record belongs to. 0 before any press.
    pub press: u64,
    /// Pulses transmitted, including the button pulse.
    pub pulses: u64,
    /// Low pulses transmitted.
    pub low: u64,
    /// High pulses transmitted.
    pub high: u64,
    /// Pulses that landed on an unmodeled sink.
    pub sink_pulses: u64,
    /// Largest number of pulses waiting in the queue at once.
    pub peak_queue_depth: usize,
    /// Wall-clock time for the press, in microseconds.
    pub elapsed_us: u64,
}

impl CycleMetrics {
    pub(crate) fn record(&mut self, pulse: &Pulse) {
        self.pulses += 1;
        if pulse.level.is_high() {
            self.high += 1;
        } else {
            self.low += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsenet_core::{Level, ModuleId};

    #[test]
    fn default_metrics_are_zero() {
        let m = CycleMetrics::default();
        assert_eq!(m.press, 0);
        assert_eq!(m.pulses, 0);
        assert_eq!(m.low, 0);
        assert_eq!(m.high, 0);
        assert_eq!(m.sink_pulses, 0);
        assert_eq!(m.peak_queue_depth, 0);
        assert_eq!(m.elapsed_us, 0);
    }

    #[test]
    fn record_splits_by_level() {
        let mut m = CycleMetrics::default();
        m.record(&Pulse::new(ModuleId(0), ModuleId(1), Level::Low));
        m.record(&Pulse::new(ModuleId(1), ModuleId(2), Level::High));
        m.record(&Pulse::new(ModuleId(1), ModuleId(3), Level::High));
        assert_eq!((m.pulses, m.low, m.high), (3, 1, 2));
    }
}
