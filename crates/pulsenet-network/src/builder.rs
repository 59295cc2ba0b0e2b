//! Network construction and validation.
//!
//! [`NetworkBuilder`] collects kind declarations and edges in any order,
//! then [`build()`](NetworkBuilder::build) validates them and wires every
//! conjunction's tracked-input set from a full pre-scan of the edges.
//! [`Blueprint`] is the declarative form the text parser produces; it is
//! `Clone` so callers can build as many independent networks as they need.

use indexmap::IndexMap;
use pulsenet_core::{ModuleId, ModuleInterner, NetworkError, BROADCASTER_NAME};
use tracing::debug;

use crate::module::{Module, ModuleKind};
use crate::network::Network;

// ── NetworkBuilder ──────────────────────────────────────────────

/// Incremental builder for a [`Network`].
///
/// Names are interned in the order they are first mentioned, whether by
/// [`declare`](Self::declare) or [`edge`](Self::edge), so identical call
/// sequences produce identical IDs.
#[derive(Clone, Debug, Default)]
pub struct NetworkBuilder {
    interner: ModuleInterner,
    kinds: IndexMap<ModuleId, ModuleKind>,
    edges: Vec<(ModuleId, ModuleId)>,
    duplicate: Option<ModuleId>,
}

impl NetworkBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` as a module of `kind`.
    ///
    /// Declaring the same name twice is reported by `build()`.
    pub fn declare(&mut self, name: &str, kind: ModuleKind) -> &mut Self {
        let id = self.interner.intern(name);
        if self.kinds.insert(id, kind).is_some() && self.duplicate.is_none() {
            self.duplicate = Some(id);
        }
        self
    }

    /// Add an edge `src -> dst`. `dst` may be an undeclared sink.
    pub fn edge(&mut self, src: &str, dst: &str) -> &mut Self {
        let src = self.interner.intern(src);
        let dst = self.interner.intern(dst);
        self.edges.push((src, dst));
        self
    }

    /// Validate and construct the network.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::DuplicateModule`] if a name was declared twice.
    /// - [`NetworkError::ReservedName`] if the trigger name `button` is
    ///   declared as a module.
    /// - [`NetworkError::MissingBroadcaster`] / [`NetworkError::DuplicateBroadcaster`]
    ///   unless exactly one broadcaster is declared.
    /// - [`NetworkError::MisnamedBroadcaster`] if that broadcaster is not
    ///   named `broadcaster`.
    /// - [`NetworkError::UndeclaredSource`] if an edge starts at a name with
    ///   no declared kind.
    pub fn build(&self) -> Result<Network, NetworkError> {
        let name = |id: ModuleId| self.interner.resolve(id).unwrap_or_default().to_string();

        if let Some(id) = self.duplicate {
            return Err(NetworkError::DuplicateModule { name: name(id) });
        }
        if self.kinds.contains_key(&ModuleId::BUTTON) {
            return Err(NetworkError::ReservedName {
                name: name(ModuleId::BUTTON),
            });
        }

        let mut entry = None;
        for (&id, &kind) in &self.kinds {
            if kind != ModuleKind::Broadcaster {
                continue;
            }
            if let Some(first) = entry {
                return Err(NetworkError::DuplicateBroadcaster {
                    first: name(first),
                    second: name(id),
                });
            }
            entry = Some(id);
        }
        let entry = entry.ok_or(NetworkError::MissingBroadcaster)?;
        if self.interner.resolve(entry) != Some(BROADCASTER_NAME) {
            return Err(NetworkError::MisnamedBroadcaster { name: name(entry) });
        }

        let mut modules: Vec<Option<Module>> = vec![None; self.interner.len()];
        for (&id, &kind) in &self.kinds {
            modules[id.index()] = Some(Module::new(id, kind));
        }

        for &(src, dst) in &self.edges {
            match modules[src.index()].as_mut() {
                Some(module) => module.push_destination(dst),
                None => {
                    return Err(NetworkError::UndeclaredSource {
                        src: name(src),
                        dst: name(dst),
                    })
                }
            }
            if let Some(target) = modules[dst.index()].as_mut() {
                target.track_input(src);
            }
        }

        let network = Network {
            interner: self.interner.clone(),
            modules,
            entry,
            edge_count: self.edges.len(),
        };
        let (_, flip_flops, conjunctions) = network.kind_counts();
        debug!(
            modules = network.len(),
            flip_flops,
            conjunctions,
            edges = network.edge_count(),
            "network built"
        );
        Ok(network)
    }
}

// ── Blueprint ───────────────────────────────────────────────────

/// One declared module: its name, kind, and ordered destinations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleDecl {
    /// Module name, without any kind prefix.
    pub name: String,
    /// Declared kind.
    pub kind: ModuleKind,
    /// Destination names in declaration order.
    pub destinations: Vec<String>,
}

impl ModuleDecl {
    /// Convenience constructor.
    pub fn new<I, S>(name: impl Into<String>, kind: ModuleKind, destinations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind,
            destinations: destinations.into_iter().map(Into::into).collect(),
        }
    }
}

/// The full set of module declarations for one network.
///
/// A blueprint is never mutated by simulation. Build a fresh [`Network`]
/// from it whenever independent starting state is needed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Blueprint {
    /// Declarations in source order.
    pub modules: Vec<ModuleDecl>,
}

impl Blueprint {
    /// Wrap a list of declarations.
    pub fn new(modules: Vec<ModuleDecl>) -> Self {
        Self { modules }
    }

    /// Build a fresh network with all state at its initial values.
    ///
    /// All names are declared before any edge is added, so the edge
    /// pre-scan sees every conjunction regardless of declaration order.
    pub fn build(&self) -> Result<Network, NetworkError> {
        let mut builder = NetworkBuilder::new();
        for decl in &self.modules {
            builder.declare(&decl.name, decl.kind);
        }
        for decl in &self.modules {
            for dst in &decl.destinations {
                builder.edge(&decl.name, dst);
            }
        }
        builder.build()
    }
}
