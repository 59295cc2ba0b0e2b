//! The observer seam between the cycle engine and its callers.

use crate::pulse::Pulse;

/// Receives every pulse the cycle engine transmits, in FIFO order.
///
/// The engine calls [`observe`](PulseObserver::observe) once per dequeued
/// pulse, before the receiving module reacts. This includes the synthetic
/// button pulse and pulses delivered to unmodeled sinks.
///
/// Observers must not assume anything about module state beyond what the
/// pulse stream itself tells them.
pub trait PulseObserver {
    /// Called for every transmitted pulse.
    fn observe(&mut self, pulse: &Pulse);
}

/// A closure-backed observer, handy for queries and tests.
impl<F> PulseObserver for F
where
    F: FnMut(&Pulse),
{
    fn observe(&mut self, pulse: &Pulse) {
        (self)(pulse);
    }
}

/// Discards every pulse.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl PulseObserver for NullObserver {
    fn observe(&mut self, _pulse: &Pulse) {}
}
