//! Test utilities for pulsenet development.
//!
//! Provides reference network descriptions ([`fixtures`]) and
//! [`render_pulses`] for readable trace assertions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{counter_branches, EMPTY_TARGET, SCENARIO_A, SCENARIO_B};

use pulsenet_core::{ModuleInterner, Pulse};

/// Render pulses as `from -level-> to` using module names.
///
/// Unknown IDs render as their numeric form so a bad trace still prints.
pub fn render_pulses(interner: &ModuleInterner, pulses: &[Pulse]) -> Vec<String> {
    let name = |id| {
        interner
            .resolve(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    };
    pulses
        .iter()
        .map(|p| format!("{} -{}-> {}", name(p.from), p.level, name(p.to)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsenet_core::{Level, ModuleId};

    #[test]
    fn render_uses_names() {
        let mut interner = ModuleInterner::new();
        let b = interner.intern("broadcaster");
        let pulses = [
            Pulse::new(ModuleId::BUTTON, b, Level::Low),
            Pulse::new(b, ModuleId(42), Level::High),
        ];
        assert_eq!(
            render_pulses(&interner, &pulses),
            vec!["button -low-> broadcaster", "broadcaster -high-> #42"]
        );
    }
}
