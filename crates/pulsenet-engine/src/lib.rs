//! Cycle engine and query drivers for pulsenet.
//!
//! Provides [`CycleEngine`], which runs one button press at a time over an
//! owned [`Network`](pulsenet_network::Network), and the query drivers
//! built on it: [`count_pulses`] and [`first_convergence`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod cycle;
pub mod metrics;
pub mod query;
pub mod trace;

pub use config::{ConfigError, EngineConfig};
pub use cycle::CycleEngine;
pub use metrics::CycleMetrics;
pub use query::{
    count_pulses, first_convergence, first_low_press, gcd, lcm, lcm_all, Convergence, PulseTotals,
};
pub use trace::{trace_hash, PulseTrace, TraceHasher};
