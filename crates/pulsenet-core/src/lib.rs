//! Core types and traits for the pulsenet simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the pulsenet workspace:
//! module identifiers, pulse levels, the pulse record, the observer
//! trait, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod pulse;
pub mod traits;

pub use error::{CycleError, NetworkError, QueryError};
pub use id::{ModuleId, ModuleInterner, BROADCASTER_NAME, BUTTON_NAME};
pub use pulse::{Level, Pulse};
pub use traits::{NullObserver, PulseObserver};
