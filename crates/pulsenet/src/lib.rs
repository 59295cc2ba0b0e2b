//! Pulsenet: a discrete-event simulator for pulse-propagation networks.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all pulsenet sub-crates. For most users, adding `pulsenet` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use pulsenet::prelude::*;
//!
//! let blueprint: Blueprint = "\
//! broadcaster -> a
//! %a -> inv, con
//! &inv -> b
//! %b -> con
//! &con -> output
//! "
//! .parse()
//! .unwrap();
//!
//! // Aggregate pulse counts over 1000 presses.
//! let mut engine = CycleEngine::with_defaults(blueprint.build().unwrap());
//! let totals = count_pulses(&mut engine, 1000).unwrap();
//! assert_eq!((totals.low, totals.high), (4250, 2750));
//! assert_eq!(totals.product(), 11_687_500);
//!
//! // Watch individual pulses on a fresh network.
//! let mut engine = CycleEngine::with_defaults(blueprint.build().unwrap());
//! let output = engine.network().id("output").unwrap();
//! let mut to_output = 0;
//! engine
//!     .press(&mut |pulse: &Pulse| {
//!         if pulse.to == output {
//!             to_output += 1;
//!         }
//!     })
//!     .unwrap();
//! assert_eq!(to_output, 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `pulsenet-core` | IDs, levels, pulses, observer trait, errors |
//! | [`network`] | `pulsenet-network` | Module kinds, builder, text format |
//! | [`engine`] | `pulsenet-engine` | Cycle engine, query drivers, tracing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`pulsenet-core`).
///
/// Contains [`types::ModuleId`], [`types::Level`], [`types::Pulse`], the
/// [`types::PulseObserver`] trait, and the error enums.
pub use pulsenet_core as types;

/// Module kinds and network construction (`pulsenet-network`).
///
/// Build a [`network::Network`] with [`network::NetworkBuilder`] or from a
/// parsed [`network::Blueprint`].
pub use pulsenet_network as network;

/// The cycle engine and query drivers (`pulsenet-engine`).
///
/// [`engine::CycleEngine`] runs one press at a time;
/// [`engine::count_pulses`] and [`engine::first_low_press`] answer the
/// aggregate and convergence questions.
pub use pulsenet_engine as engine;

/// Common imports for typical pulsenet usage.
///
/// ```rust
/// use pulsenet::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use pulsenet_core::{Level, ModuleId, Pulse, PulseObserver};

    // Errors
    pub use pulsenet_core::{CycleError, NetworkError, QueryError};

    // Network
    pub use pulsenet_network::{Blueprint, ModuleKind, Network, NetworkBuilder, ParseError};

    // Engine
    pub use pulsenet_engine::{
        count_pulses, first_convergence, first_low_press, CycleEngine, CycleMetrics,
        EngineConfig, PulseTotals, PulseTrace,
    };
}
