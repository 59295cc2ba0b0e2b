//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] bounds the work a [`CycleEngine`](crate::CycleEngine)
//! will do. [`validate()`](EngineConfig::validate) runs when the engine is
//! constructed.

use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `pulse_budget` is zero; not even the button pulse could run.
    ZeroPulseBudget,
    /// `press_budget` is zero; no query could make progress.
    ZeroPressBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPulseBudget => write!(f, "pulse_budget must be at least 1"),
            Self::ZeroPressBudget => write!(f, "press_budget must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── EngineConfig ───────────────────────────────────────────────────

/// Work limits for a cycle engine and the queries run on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum pulses processed in one press before it is declared
    /// divergent. Default: 1,048,576.
    pub pulse_budget: usize,
    /// Maximum presses a convergence query may run. Default: 1,048,576.
    pub press_budget: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pulse_budget: 1 << 20,
            press_budget: 1 << 20,
        }
    }
}

impl EngineConfig {
    /// Check that both budgets are non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pulse_budget == 0 {
            return Err(ConfigError::ZeroPulseBudget);
        }
        if self.press_budget == 0 {
            return Err(ConfigError::ZeroPressBudget);
        }
        Ok(())
    }
}
