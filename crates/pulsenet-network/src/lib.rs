//! Module kinds, network construction, and the text format for pulsenet.
//!
//! - [`module`]: the closed set of module kinds and their reaction rules.
//! - [`builder`]: [`NetworkBuilder`] and the declarative [`Blueprint`].
//! - [`network`]: the validated, owned module graph.
//! - [`parse`]: line-oriented text format for blueprints.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod module;
pub mod network;
pub mod parse;

pub use builder::{Blueprint, ModuleDecl, NetworkBuilder};
pub use module::{Behavior, Conjunction, Emission, FlipFlop, Module, ModuleKind};
pub use network::{Dispatch, Network};
pub use parse::{parse_blueprint, parse_line, ParseError, ParseErrorKind};
