//! Benchmark profiles for the pulsenet simulator.
//!
//! Provides pre-built [`Blueprint`] profiles for benchmarking:
//!
//! - [`reference_profile`]: four counter branches with 12-bit prime periods
//! - [`stress_profile`]: sixteen counter branches for pulse throughput
//! - [`fresh_engine`]: a default-configured engine over a new network

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use pulsenet_engine::CycleEngine;
use pulsenet_network::Blueprint;
use pulsenet_test_utils::counter_branches;

/// Branch periods of the reference profile. Pairwise coprime.
pub const REFERENCE_PERIODS: [u64; 4] = [3733, 3793, 3917, 4051];

/// Build the reference profile: four 12-bit counter branches.
///
/// The convergence press is the product of [`REFERENCE_PERIODS`], far
/// beyond what brute-force pressing could reach.
pub fn reference_profile() -> Blueprint {
    parse(&counter_branches(&REFERENCE_PERIODS))
}

/// Build a stress profile: sixteen counter branches.
///
/// Periods are the first sixteen odd numbers from 4001. Intended for
/// per-press throughput, not convergence; the LCM does not fit a `u64`.
pub fn stress_profile() -> Blueprint {
    let periods: Vec<u64> = (0..16).map(|i| 4001 + 2 * i).collect();
    parse(&counter_branches(&periods))
}

/// A default-configured engine over a freshly built network.
pub fn fresh_engine(blueprint: &Blueprint) -> CycleEngine {
    CycleEngine::with_defaults(
        blueprint
            .build()
            .unwrap_or_else(|e| panic!("profile must build: {e}")),
    )
}

fn parse(text: &str) -> Blueprint {
    text.parse()
        .unwrap_or_else(|e| panic!("profile must parse: {e}"))
}
