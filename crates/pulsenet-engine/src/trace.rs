//! Pulse recording and trace hashing.
//!
//! [`PulseTrace`] is an observer that keeps every pulse it sees.
//! [`trace_hash`] folds a pulse sequence into a single FNV-1a value so two
//! runs can be compared for determinism without holding both traces.
//! These hashes are not cryptographically secure.

use pulsenet_core::{Level, Pulse, PulseObserver};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Fold one pulse into a running FNV-1a state.
#[inline]
pub fn hash_pulse(hash: u64, pulse: &Pulse) -> u64 {
    let hash = fnv1a_u32(hash, pulse.from.0);
    let hash = fnv1a_u32(hash, pulse.to.0);
    fnv1a_byte(
        hash,
        match pulse.level {
            Level::Low => 0,
            Level::High => 1,
        },
    )
}

/// Hash a pulse sequence. Order matters.
///
/// Returns the FNV offset basis for an empty sequence.
pub fn trace_hash(pulses: &[Pulse]) -> u64 {
    pulses.iter().fold(FNV_OFFSET, hash_pulse)
}

/// Records every observed pulse in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PulseTrace {
    pulses: Vec<Pulse>,
}

impl PulseTrace {
    /// An empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded pulses, oldest first.
    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    /// Number of recorded pulses.
    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }

    /// Drop every recorded pulse.
    pub fn clear(&mut self) {
        self.pulses.clear();
    }

    /// [`trace_hash`] of the recorded pulses.
    pub fn hash(&self) -> u64 {
        trace_hash(&self.pulses)
    }
}

impl PulseObserver for PulseTrace {
    fn observe(&mut self, pulse: &Pulse) {
        self.pulses.push(*pulse);
    }
}

/// Observer that keeps only a running [`trace_hash`], for long runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceHasher {
    hash: u64,
}

impl TraceHasher {
    /// A hasher in the empty-sequence state.
    pub fn new() -> Self {
        Self { hash: FNV_OFFSET }
    }

    /// Hash of everything observed so far.
    pub fn finish(&self) -> u64 {
        self.hash
    }
}

impl Default for TraceHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PulseObserver for TraceHasher {
    fn observe(&mut self, pulse: &Pulse) {
        self.hash = hash_pulse(self.hash, pulse);
    }
}
