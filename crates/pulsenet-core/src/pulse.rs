//! Pulse levels and the transient pulse record.

use std::fmt;
use std::ops::Not;

use crate::id::ModuleId;

/// The level carried by a pulse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Level {
    /// Low pulse. Also the remembered level a conjunction starts with.
    #[default]
    Low,
    /// High pulse.
    High,
}

impl Level {
    /// `true` for [`Level::High`].
    #[inline]
    pub fn is_high(self) -> bool {
        matches!(self, Self::High)
    }

    /// `true` for [`Level::Low`].
    #[inline]
    pub fn is_low(self) -> bool {
        matches!(self, Self::Low)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::High => write!(f, "high"),
        }
    }
}

/// One pulse in flight: `from` sent `level` to `to`.
///
/// Pulses are created and consumed within a single button press and are
/// never stored by the engine past the end of that press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pulse {
    /// Sender.
    pub from: ModuleId,
    /// Receiver. May name an unmodeled sink.
    pub to: ModuleId,
    /// Carried level.
    pub level: Level,
}

impl Pulse {
    /// Construct a pulse.
    #[inline]
    pub fn new(from: ModuleId, to: ModuleId, level: Level) -> Self {
        Self { from, to, level }
    }
}

impl fmt::Display for Pulse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -{}-> {}", self.from, self.level, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_low() {
        assert_eq!(Level::default(), Level::Low);
    }

    #[test]
    fn bool_conversions() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(bool::from(Level::High));
        assert!(!bool::from(Level::Low));
    }

    #[test]
    fn not_inverts() {
        assert_eq!(!Level::Low, Level::High);
        assert_eq!(!!Level::High, Level::High);
    }

    #[test]
    fn pulse_display() {
        let p = Pulse::new(ModuleId(1), ModuleId(2), Level::High);
        assert_eq!(p.to_string(), "#1 -high-> #2");
    }
}
