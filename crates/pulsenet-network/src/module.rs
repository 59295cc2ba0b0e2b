//! Module kinds and their pulse-reaction rules.
//!
//! A [`Module`] is a fixed destination list plus a [`Behavior`], a closed
//! sum type with one variant per kind. Each variant owns its own state and
//! decides, per received pulse, whether to emit and at which level. The
//! module then fans that level out to every destination in order.
//!
//! Modules never touch the pulse queue or other modules; the cycle engine
//! is the only caller of [`Module::receive`].

use indexmap::IndexMap;
use pulsenet_core::{Level, ModuleId};
use smallvec::SmallVec;
use std::fmt;

/// Destination list. Most modules fan out to a handful of targets.
pub type Destinations = SmallVec<[ModuleId; 4]>;

/// The declared kind of a module, before any state exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// Stateless fan-out; the network's entry point.
    Broadcaster,
    /// One bit of state toggled by low pulses (`%` prefix).
    FlipFlop,
    /// Remembers the last level per input (`&` prefix).
    Conjunction,
}

impl ModuleKind {
    /// Prefix character used by the text format, if any.
    pub fn prefix(self) -> Option<char> {
        match self {
            Self::Broadcaster => None,
            Self::FlipFlop => Some('%'),
            Self::Conjunction => Some('&'),
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Broadcaster => write!(f, "broadcaster"),
            Self::FlipFlop => write!(f, "flip-flop"),
            Self::Conjunction => write!(f, "conjunction"),
        }
    }
}

// ── FlipFlop ────────────────────────────────────────────────────

/// A single bit, initially off.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlipFlop {
    on: bool,
}

impl FlipFlop {
    /// Whether the bit is currently on.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Low toggles and emits the new state; high is ignored.
    fn react(&mut self, level: Level) -> Option<Level> {
        match level {
            Level::High => None,
            Level::Low => {
                self.on = !self.on;
                Some(Level::from(self.on))
            }
        }
    }
}

// ── Conjunction ─────────────────────────────────────────────────

/// Remembered level per tracked input.
///
/// The input set is fixed once the network is built. `high` caches how many
/// inputs currently remember [`Level::High`] so a reaction is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Conjunction {
    memory: IndexMap<ModuleId, Level>,
    high: usize,
}

impl Conjunction {
    /// Register `input` with a remembered level of low. Repeats are ignored.
    pub(crate) fn track(&mut self, input: ModuleId) {
        self.memory.entry(input).or_insert(Level::Low);
    }

    /// Tracked inputs in registration order.
    pub fn inputs(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.memory.keys().copied()
    }

    /// Number of tracked inputs.
    pub fn input_count(&self) -> usize {
        self.memory.len()
    }

    /// Last level remembered for `input`, or `None` if it is not tracked.
    pub fn remembered(&self, input: ModuleId) -> Option<Level> {
        self.memory.get(&input).copied()
    }

    /// Whether every tracked input remembers high. Vacuously true when
    /// nothing is tracked.
    pub fn all_high(&self) -> bool {
        self.high == self.memory.len()
    }

    fn react(&mut self, from: ModuleId, level: Level) -> Option<Level> {
        match self.memory.get_mut(&from) {
            Some(slot) => {
                match (*slot, level) {
                    (Level::Low, Level::High) => self.high += 1,
                    (Level::High, Level::Low) => self.high -= 1,
                    _ => {}
                }
                *slot = level;
            }
            None => debug_assert!(false, "conjunction received from untracked input {from}"),
        }
        Some(if self.all_high() {
            Level::Low
        } else {
            Level::High
        })
    }
}

// ── Behavior ────────────────────────────────────────────────────

/// Per-kind state and reaction rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Behavior {
    /// Forwards the received level unchanged.
    Broadcaster,
    /// See [`FlipFlop`].
    FlipFlop(FlipFlop),
    /// See [`Conjunction`].
    Conjunction(Conjunction),
}

impl Behavior {
    /// Fresh state for a declared kind.
    pub fn new(kind: ModuleKind) -> Self {
        match kind {
            ModuleKind::Broadcaster => Self::Broadcaster,
            ModuleKind::FlipFlop => Self::FlipFlop(FlipFlop::default()),
            ModuleKind::Conjunction => Self::Conjunction(Conjunction::default()),
        }
    }

    /// The kind this behavior implements.
    pub fn kind(&self) -> ModuleKind {
        match self {
            Self::Broadcaster => ModuleKind::Broadcaster,
            Self::FlipFlop(_) => ModuleKind::FlipFlop,
            Self::Conjunction(_) => ModuleKind::Conjunction,
        }
    }

    fn react(&mut self, from: ModuleId, level: Level) -> Option<Level> {
        match self {
            Self::Broadcaster => Some(level),
            Self::FlipFlop(ff) => ff.react(level),
            Self::Conjunction(conj) => conj.react(from, level),
        }
    }
}

// ── Module ──────────────────────────────────────────────────────

/// A simulated module: identity, destinations, and owned state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    id: ModuleId,
    destinations: Destinations,
    behavior: Behavior,
}

impl Module {
    /// A module of `kind` with no destinations yet.
    pub fn new(id: ModuleId, kind: ModuleKind) -> Self {
        Self {
            id,
            destinations: Destinations::new(),
            behavior: Behavior::new(kind),
        }
    }

    /// This module's ID.
    pub fn id(&self) -> ModuleId {
        self.id
    }

    /// This module's kind.
    pub fn kind(&self) -> ModuleKind {
        self.behavior.kind()
    }

    /// Destinations in declaration order.
    pub fn destinations(&self) -> &[ModuleId] {
        &self.destinations
    }

    /// Read-only view of the module state.
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// The conjunction state, if this is a conjunction.
    pub fn as_conjunction(&self) -> Option<&Conjunction> {
        match &self.behavior {
            Behavior::Conjunction(conj) => Some(conj),
            _ => None,
        }
    }

    /// The flip-flop state, if this is a flip-flop.
    pub fn as_flip_flop(&self) -> Option<&FlipFlop> {
        match &self.behavior {
            Behavior::FlipFlop(ff) => Some(ff),
            _ => None,
        }
    }

    pub(crate) fn push_destination(&mut self, dst: ModuleId) {
        self.destinations.push(dst);
    }

    pub(crate) fn track_input(&mut self, input: ModuleId) {
        if let Behavior::Conjunction(conj) = &mut self.behavior {
            conj.track(input);
        }
    }

    /// React to `level` sent by `from`.
    ///
    /// Returns the outgoing `(destination, level)` pairs in destination
    /// order. State is updated eagerly, before the iterator is consumed.
    pub fn receive(&mut self, from: ModuleId, level: Level) -> Emission<'_> {
        let level = self.behavior.react(from, level);
        Emission {
            level,
            destinations: self.destinations.iter(),
        }
    }
}

/// Outgoing pulses from one [`Module::receive`] call.
#[derive(Clone, Debug)]
pub struct Emission<'a> {
    level: Option<Level>,
    destinations: std::slice::Iter<'a, ModuleId>,
}

impl Emission<'_> {
    /// The emitted level, or `None` if the module stayed silent.
    pub fn level(&self) -> Option<Level> {
        self.level
    }
}

impl Iterator for Emission<'_> {
    type Item = (ModuleId, Level);

    fn next(&mut self) -> Option<Self::Item> {
        let level = self.level?;
        self.destinations.next().map(|&dst| (dst, level))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.level {
            Some(_) => self.destinations.size_hint(),
            None => (0, Some(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const A: ModuleId = ModuleId(10);
    const B: ModuleId = ModuleId(11);
    const C: ModuleId = ModuleId(12);

    fn module(kind: ModuleKind, dests: &[ModuleId]) -> Module {
        let mut m = Module::new(ModuleId(1), kind);
        for &d in dests {
            m.push_destination(d);
        }
        m
    }

    fn conjunction(inputs: &[ModuleId], dests: &[ModuleId]) -> Module {
        let mut m = module(ModuleKind::Conjunction, dests);
        for &i in inputs {
            m.track_input(i);
        }
        m
    }

    #[test]
    fn broadcaster_forwards_level_to_every_destination() {
        let mut m = module(ModuleKind::Broadcaster, &[A, B, C]);
        let out: Vec<_> = m.receive(ModuleId::BUTTON, Level::Low).collect();
        assert_eq!(out, vec![(A, Level::Low), (B, Level::Low), (C, Level::Low)]);
        let out: Vec<_> = m.receive(ModuleId::BUTTON, Level::High).collect();
        assert_eq!(out, vec![(A, Level::High), (B, Level::High), (C, Level::High)]);
    }

    #[test]
    fn flip_flop_ignores_high() {
        let mut m = module(ModuleKind::FlipFlop, &[A]);
        assert_eq!(m.receive(B, Level::High).count(), 0);
        assert!(!m.as_flip_flop().unwrap().is_on());
    }

    #[test]
    fn flip_flop_toggles_on_low() {
        let mut m = module(ModuleKind::FlipFlop, &[A, B]);
        let out: Vec<_> = m.receive(C, Level::Low).collect();
        assert_eq!(out, vec![(A, Level::High), (B, Level::High)]);
        assert!(m.as_flip_flop().unwrap().is_on());

        let out: Vec<_> = m.receive(C, Level::Low).collect();
        assert_eq!(out, vec![(A, Level::Low), (B, Level::Low)]);
        assert!(!m.as_flip_flop().unwrap().is_on());
    }

    #[test]
    fn conjunction_starts_low_for_every_input() {
        let mut m = conjunction(&[A, B], &[C]);
        let conj = m.as_conjunction().unwrap();
        assert_eq!(conj.remembered(A), Some(Level::Low));
        assert_eq!(conj.remembered(B), Some(Level::Low));
        assert_eq!(conj.remembered(C), None);

        // One input high is not enough.
        let out: Vec<_> = m.receive(A, Level::High).collect();
        assert_eq!(out, vec![(C, Level::High)]);
        // Both high: emit low.
        let out: Vec<_> = m.receive(B, Level::High).collect();
        assert_eq!(out, vec![(C, Level::Low)]);
        // Dropping one back to low emits high again.
        let out: Vec<_> = m.receive(A, Level::Low).collect();
        assert_eq!(out, vec![(C, Level::High)]);
    }

    #[test]
    fn single_input_conjunction_inverts() {
        let mut m = conjunction(&[A], &[B]);
        assert_eq!(m.receive(A, Level::High).level(), Some(Level::Low));
        assert_eq!(m.receive(A, Level::Low).level(), Some(Level::High));
    }

    #[test]
    fn empty_conjunction_is_vacuously_all_high() {
        let m = conjunction(&[], &[A]);
        assert!(m.as_conjunction().unwrap().all_high());
        assert_eq!(m.as_conjunction().unwrap().input_count(), 0);
    }

    #[test]
    fn tracking_is_idempotent() {
        let m = conjunction(&[A, A, B], &[]);
        let inputs: Vec<_> = m.as_conjunction().unwrap().inputs().collect();
        assert_eq!(inputs, vec![A, B]);
    }

    #[test]
    fn silent_emission_has_zero_size_hint() {
        let mut m = module(ModuleKind::FlipFlop, &[A, B]);
        let e = m.receive(C, Level::High);
        assert_eq!(e.size_hint(), (0, Some(0)));
    }

    #[test]
    fn kind_prefixes() {
        assert_eq!(ModuleKind::Broadcaster.prefix(), None);
        assert_eq!(ModuleKind::FlipFlop.prefix(), Some('%'));
        assert_eq!(ModuleKind::Conjunction.prefix(), Some('&'));
    }

    fn arb_level() -> impl Strategy<Value = Level> {
        any::<bool>().prop_map(Level::from)
    }

    proptest! {
        #[test]
        fn broadcaster_is_identity(level in arb_level()) {
            let mut m = module(ModuleKind::Broadcaster, &[A, B]);
            for (_, out) in m.receive(ModuleId::BUTTON, level) {
                prop_assert_eq!(out, level);
            }
        }

        #[test]
        fn flip_flop_double_low_is_involution(
            prefix in prop::collection::vec(arb_level(), 0..16),
        ) {
            let mut m = module(ModuleKind::FlipFlop, &[A]);
            for level in prefix {
                m.receive(B, level).for_each(drop);
            }
            let before = m.clone();
            m.receive(B, Level::Low).for_each(drop);
            m.receive(B, Level::Low).for_each(drop);
            prop_assert_eq!(m, before);
        }

        #[test]
        fn flip_flop_high_changes_nothing(
            prefix in prop::collection::vec(arb_level(), 0..16),
        ) {
            let mut m = module(ModuleKind::FlipFlop, &[A]);
            for level in prefix {
                m.receive(B, level).for_each(drop);
            }
            let before = m.clone();
            prop_assert_eq!(m.receive(B, Level::High).count(), 0);
            prop_assert_eq!(m, before);
        }

        #[test]
        fn conjunction_low_iff_all_high(
            pulses in prop::collection::vec((0usize..3, arb_level()), 1..32),
        ) {
            let inputs = [A, B, C];
            let mut m = conjunction(&inputs, &[ModuleId(99)]);
            let mut shadow = [Level::Low; 3];
            for (idx, level) in pulses {
                shadow[idx] = level;
                let emitted = m.receive(inputs[idx], level).level();
                let expected = if shadow.iter().all(|l| l.is_high()) {
                    Level::Low
                } else {
                    Level::High
                };
                prop_assert_eq!(emitted, Some(expected));
            }
        }
    }
}
