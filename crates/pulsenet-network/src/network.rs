//! The validated module graph.
//!
//! A [`Network`] owns every [`Module`] keyed by [`ModuleId`] together with
//! the interner that names them. Its topology is fixed at build time; only
//! module state changes afterwards, and only through [`Network::dispatch`].

use pulsenet_core::{ModuleId, ModuleInterner, NetworkError};

use crate::module::{Conjunction, Module, ModuleKind};

/// Where a pulse addressed to some ID ends up.
#[derive(Debug)]
pub enum Dispatch<'a> {
    /// A declared module that reacts to the pulse.
    Module(&'a mut Module),
    /// An unmodeled sink (or the button). Observed, never propagates.
    Sink,
}

/// An immutable directed graph of stateful modules.
#[derive(Clone, Debug)]
pub struct Network {
    pub(crate) interner: ModuleInterner,
    /// Indexed by `ModuleId`. `None` for sinks and the button.
    pub(crate) modules: Vec<Option<Module>>,
    pub(crate) entry: ModuleId,
    pub(crate) edge_count: usize,
}

impl Network {
    /// ID of the broadcaster every button press starts from.
    pub fn entry(&self) -> ModuleId {
        self.entry
    }

    /// Resolve a destination to a live module or a sink marker.
    pub fn dispatch(&mut self, to: ModuleId) -> Dispatch<'_> {
        match self.modules.get_mut(to.index()) {
            Some(Some(module)) => Dispatch::Module(module),
            _ => Dispatch::Sink,
        }
    }

    /// The declared module behind `id`, if any.
    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        self.modules.get(id.index()).and_then(Option::as_ref)
    }

    /// Iterate declared modules in ID order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> + '_ {
        self.modules.iter().flatten()
    }

    /// ID for a declared or referenced name.
    pub fn id(&self, name: &str) -> Option<ModuleId> {
        self.interner.get(name)
    }

    /// Name for an ID issued by this network.
    pub fn name(&self, id: ModuleId) -> Option<&str> {
        self.interner.resolve(id)
    }

    /// The name interner shared by every ID in this network.
    pub fn interner(&self) -> &ModuleInterner {
        &self.interner
    }

    /// Whether `id` names something that is referenced but not declared.
    pub fn is_sink(&self, id: ModuleId) -> bool {
        id != ModuleId::BUTTON
            && id.index() < self.interner.len()
            && self.module(id).is_none()
    }

    /// Modules with `id` among their destinations, in ID order.
    pub fn predecessors(&self, id: ModuleId) -> Vec<ModuleId> {
        self.modules()
            .filter(|m| m.destinations().contains(&id))
            .map(Module::id)
            .collect()
    }

    /// Number of declared modules.
    pub fn len(&self) -> usize {
        self.modules().count()
    }

    /// Always `false` for a built network: the broadcaster exists.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of declared edges, counting repeats.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Look up `name` and require it to be a conjunction.
    pub fn conjunction(&self, name: &str) -> Result<(ModuleId, &Conjunction), NetworkError> {
        let id = self.id(name).ok_or_else(|| NetworkError::UnknownModule {
            name: name.to_string(),
        })?;
        self.module(id)
            .and_then(Module::as_conjunction)
            .map(|conj| (id, conj))
            .ok_or_else(|| NetworkError::NotAConjunction {
                name: name.to_string(),
            })
    }

    /// Count of declared modules per kind: `(broadcasters, flip-flops,
    /// conjunctions)`.
    pub fn kind_counts(&self) -> (usize, usize, usize) {
        self.modules()
            .fold((0, 0, 0), |(b, f, c), m| match m.kind() {
                ModuleKind::Broadcaster => (b + 1, f, c),
                ModuleKind::FlipFlop => (b, f + 1, c),
                ModuleKind::Conjunction => (b, f, c + 1),
            })
    }
}
