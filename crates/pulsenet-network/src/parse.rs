//! Text format for module declarations.
//!
//! One module per line:
//!
//! ```text
//! broadcaster -> a, b, c
//! %a -> b
//! &inv -> a
//! ```
//!
//! No prefix declares the broadcaster, `%` a flip-flop, `&` a conjunction.
//! Blank lines are skipped. Structural checks (duplicates, broadcaster
//! count and name, the reserved `button` name) happen when the
//! [`Blueprint`] is built, not here.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::builder::{Blueprint, ModuleDecl};
use crate::module::ModuleKind;

const ARROW: &str = "->";

/// What was wrong with a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line has no `->` separator.
    MissingArrow,
    /// The module name is empty (possibly after its prefix).
    EmptyName,
    /// A destination in the list is empty, e.g. `a -> b,, c`.
    EmptyDestination,
}

/// A line that could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// 1-indexed line number.
    pub line: usize,
    /// The failure.
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ParseErrorKind::MissingArrow => "missing '->'",
            ParseErrorKind::EmptyName => "empty module name",
            ParseErrorKind::EmptyDestination => "empty destination",
        };
        write!(f, "line {}: {what}", self.line)
    }
}

impl Error for ParseError {}

/// Parse one non-blank line.
pub fn parse_line(line: &str) -> Result<ModuleDecl, ParseErrorKind> {
    let (lhs, rhs) = line
        .split_once(ARROW)
        .ok_or(ParseErrorKind::MissingArrow)?;

    let lhs = lhs.trim();
    let (kind, name) = match lhs.chars().next() {
        Some('%') => (ModuleKind::FlipFlop, &lhs[1..]),
        Some('&') => (ModuleKind::Conjunction, &lhs[1..]),
        _ => (ModuleKind::Broadcaster, lhs),
    };
    if name.is_empty() {
        return Err(ParseErrorKind::EmptyName);
    }

    let rhs = rhs.trim();
    let destinations = if rhs.is_empty() {
        Vec::new()
    } else {
        rhs.split(',')
            .map(|d| match d.trim() {
                "" => Err(ParseErrorKind::EmptyDestination),
                d => Ok(d.to_string()),
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(ModuleDecl {
        name: name.to_string(),
        kind,
        destinations,
    })
}

/// Parse a whole module description.
pub fn parse_blueprint(text: &str) -> Result<Blueprint, ParseError> {
    let modules = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line).map_err(|kind| ParseError { line: idx + 1, kind }))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Blueprint::new(modules))
}

impl FromStr for Blueprint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_blueprint(s)
    }
}

impl fmt::Display for ModuleDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.kind.prefix() {
            write!(f, "{prefix}")?;
        }
        write!(f, "{} {ARROW} {}", self.name, self.destinations.join(", "))
    }
}

impl fmt::Display for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for decl in &self.modules {
            writeln!(f, "{decl}")?;
        }
        Ok(())
    }
}
