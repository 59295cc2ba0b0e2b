//! Error types for the pulsenet simulator.
//!
//! Organized by where the failure surfaces: network construction and query
//! setup ([`NetworkError`]), a single button press ([`CycleError`]), and
//! the query drivers ([`QueryError`]). All of them are fatal to the
//! network instance they came from; callers rebuild to retry.

use std::error::Error;
use std::fmt;

/// A network that cannot be built, or cannot answer the requested query.
///
/// Every variant is a member of the "malformed network" family: the
/// declarations themselves are at fault, not the simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NetworkError {
    /// An edge starts at a module with no declared kind.
    UndeclaredSource {
        /// Name of the undeclared source.
        src: String,
        /// Destination of the offending edge.
        dst: String,
    },
    /// A module name was declared more than once.
    DuplicateModule {
        /// The repeated name.
        name: String,
    },
    /// No broadcaster was declared.
    MissingBroadcaster,
    /// More than one broadcaster was declared.
    DuplicateBroadcaster {
        /// Name of the first broadcaster.
        first: String,
        /// Name of the second broadcaster.
        second: String,
    },
    /// The broadcaster is declared under a name other than
    /// [`BROADCASTER_NAME`](crate::id::BROADCASTER_NAME).
    MisnamedBroadcaster {
        /// The name it was declared under.
        name: String,
    },
    /// A module is declared under the reserved trigger name
    /// [`BUTTON_NAME`](crate::id::BUTTON_NAME).
    ReservedName {
        /// The reserved name.
        name: String,
    },
    /// A query named a module that is neither declared nor referenced.
    UnknownModule {
        /// The unknown name.
        name: String,
    },
    /// A query required a conjunction but the module is another kind
    /// (or an unmodeled sink).
    NotAConjunction {
        /// Name of the module.
        name: String,
    },
    /// A conjunction designated as convergence target tracks no inputs.
    EmptyConjunction {
        /// Name of the conjunction.
        name: String,
    },
    /// A sink used to locate a convergence target is not fed by exactly
    /// one module.
    NoSinglePredecessor {
        /// Name of the sink.
        sink: String,
        /// Number of modules found feeding it.
        found: usize,
    },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndeclaredSource { src, dst } => {
                write!(f, "edge '{src}' -> '{dst}' starts at an undeclared module")
            }
            Self::DuplicateModule { name } => write!(f, "module '{name}' declared twice"),
            Self::MissingBroadcaster => write!(f, "no broadcaster declared"),
            Self::DuplicateBroadcaster { first, second } => {
                write!(f, "second broadcaster '{second}' (first was '{first}')")
            }
            Self::MisnamedBroadcaster { name } => write!(
                f,
                "broadcaster declared as '{name}', expected '{}'",
                crate::id::BROADCASTER_NAME
            ),
            Self::ReservedName { name } => {
                write!(f, "'{name}' is reserved for the trigger and cannot be declared")
            }
            Self::UnknownModule { name } => write!(f, "unknown module '{name}'"),
            Self::NotAConjunction { name } => write!(f, "module '{name}' is not a conjunction"),
            Self::EmptyConjunction { name } => {
                write!(f, "conjunction '{name}' has no tracked inputs")
            }
            Self::NoSinglePredecessor { sink, found } => {
                write!(f, "'{sink}' is fed by {found} modules, expected exactly 1")
            }
        }
    }
}

impl Error for NetworkError {}

/// Errors from a single button press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleError {
    /// The press exceeded its pulse budget without draining the queue.
    ///
    /// Module state is left mid-press; the engine refuses further presses.
    Divergence {
        /// 1-indexed press that diverged.
        press: u64,
        /// Pulses processed before giving up.
        pulses: usize,
        /// The configured per-press budget.
        budget: usize,
    },
    /// A previous press diverged; the network state is no longer trusted.
    Poisoned,
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Divergence {
                press,
                pulses,
                budget,
            } => write!(
                f,
                "press {press} diverged after {pulses} pulses (budget {budget})"
            ),
            Self::Poisoned => write!(f, "engine poisoned by an earlier divergence"),
        }
    }
}

impl Error for CycleError {}

/// Errors from the query drivers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// The network cannot answer this query.
    Network(NetworkError),
    /// A press failed while the query was running.
    Cycle(CycleError),
    /// The press budget ran out before every tracked input was observed.
    NotConverged {
        /// Presses run by the query.
        presses: u64,
        /// Tracked inputs still without a first-HIGH index.
        pending: usize,
    },
    /// The least common multiple does not fit in a `u64`.
    Overflow,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network: {e}"),
            Self::Cycle(e) => write!(f, "cycle: {e}"),
            Self::NotConverged { presses, pending } => write!(
                f,
                "{pending} inputs still unobserved after {presses} presses"
            ),
            Self::Overflow => write!(f, "least common multiple overflows u64"),
        }
    }
}

impl Error for QueryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            Self::Cycle(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NetworkError> for QueryError {
    fn from(e: NetworkError) -> Self {
        Self::Network(e)
    }
}

impl From<CycleError> for QueryError {
    fn from(e: CycleError) -> Self {
        Self::Cycle(e)
    }
}
