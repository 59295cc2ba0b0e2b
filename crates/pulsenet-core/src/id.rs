//! Strongly-typed module identifiers and the name interner.

use indexmap::IndexSet;
use std::fmt;

/// Name of the external trigger origin. Never declared as a module.
pub const BUTTON_NAME: &str = "button";

/// Name of the single entry-point module triggered by each button press.
pub const BROADCASTER_NAME: &str = "broadcaster";

/// Identifies a module (or an unmodeled sink) within a network.
///
/// IDs are dense indices handed out by a [`ModuleInterner`]. `ModuleId(n)`
/// is the n-th distinct name the interner has seen. Comparing two IDs from
/// different interners is meaningless.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(pub u32);

impl ModuleId {
    /// The external trigger origin. Every interner reserves index 0 for it.
    pub const BUTTON: ModuleId = ModuleId(0);

    /// The ID as a `usize` index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ModuleId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Bidirectional mapping between module names and [`ModuleId`]s.
///
/// Interning is insertion-ordered, so building the same declarations twice
/// yields identical IDs. [`BUTTON_NAME`] is always interned first.
#[derive(Clone, Debug)]
pub struct ModuleInterner {
    names: IndexSet<String>,
}

impl ModuleInterner {
    /// Create an interner holding only the reserved button name.
    pub fn new() -> Self {
        let mut names = IndexSet::new();
        names.insert(BUTTON_NAME.to_string());
        Self { names }
    }

    /// Return the ID for `name`, allocating a new one if it is unseen.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` distinct names are interned.
    pub fn intern(&mut self, name: &str) -> ModuleId {
        if let Some(idx) = self.names.get_index_of(name) {
            return ModuleId(idx as u32);
        }
        let (idx, _) = self.names.insert_full(name.to_string());
        ModuleId(u32::try_from(idx).expect("module name count exceeds u32::MAX"))
    }

    /// Look up a name without interning it.
    pub fn get(&self, name: &str) -> Option<ModuleId> {
        self.names.get_index_of(name).map(|idx| ModuleId(idx as u32))
    }

    /// The name behind `id`, if `id` was issued by this interner.
    pub fn resolve(&self, id: ModuleId) -> Option<&str> {
        self.names.get_index(id.index()).map(String::as_str)
    }

    /// Number of interned names, including the reserved button name.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`: the button name is interned at construction.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate `(id, name)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(idx, name)| (ModuleId(idx as u32), name.as_str()))
    }
}

impl Default for ModuleInterner {
    fn default() -> Self {
        Self::new()
    }
}
