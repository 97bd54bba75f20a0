//! Action log — the macro text a scheduling run produces.

use std::fmt;

use crate::error::MacroError;
use crate::ActionKind;

/// One line of macro output.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Human-readable marker, emitted only in verbose runs.
    Comment(String),
    Cast { kind: ActionKind, slot: u32 },
    /// Seconds. Kept exact; rounding happens only when rendered.
    Wait(f64),
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Comment(name) => write!(f, "# Casting: {name}"),
            Directive::Cast { kind, slot } => write!(f, "/{kind} {slot}"),
            Directive::Wait(seconds) => write!(f, "/wait {seconds:.1}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionLog {
    directives: Vec<Directive>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn push_comment(&mut self, name: &str) {
        self.directives.push(Directive::Comment(name.to_string()));
    }

    pub fn push_cast(&mut self, kind: ActionKind, slot: u32) {
        self.directives.push(Directive::Cast { kind, slot });
    }

    pub fn push_wait(&mut self, seconds: f64) {
        self.directives.push(Directive::Wait(seconds));
    }

    /// Lengthen the final wait by `extra` seconds. The only mutation the log
    /// allows; used to fold idle time into the previous action.
    pub fn extend_last_wait(&mut self, extra: f64) -> Result<(), MacroError> {
        match self.directives.last_mut() {
            Some(Directive::Wait(seconds)) => {
                *seconds += extra;
                Ok(())
            }
            _ => Err(MacroError::Inconsistent(
                "no trailing wait line to extend".to_string(),
            )),
        }
    }

    pub fn cast_count(&self) -> usize {
        self.directives
            .iter()
            .filter(|d| matches!(d, Directive::Cast { .. }))
            .count()
    }

    /// Total seconds covered by all wait lines.
    pub fn total_wait(&self) -> f64 {
        self.directives
            .iter()
            .filter_map(|d| match d {
                Directive::Wait(seconds) => Some(*seconds),
                _ => None,
            })
            .sum()
    }

    /// Each directive on its own line, newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for directive in &self.directives {
            out.push_str(&directive.to_string());
            out.push('\n');
        }
        out
    }

    pub fn lines(&self) -> Vec<String> {
        self.directives.iter().map(ToString::to_string).collect()
    }
}
