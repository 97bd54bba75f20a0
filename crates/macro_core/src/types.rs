//! Type definitions for `macro_core`.
//!
//! Ability definitions as persisted in a spellbook, plus the runtime timing
//! state the scheduler attaches to them for the length of one run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MacroError;

/// Minimum time between any two consecutive actions, in seconds.
pub const GLOBAL_COOLDOWN_FLOOR: f64 = 1.1;

// ---------------------------------------------------------------------------
// Core enums
// ---------------------------------------------------------------------------

/// Which macro verb fires the ability. No behavioral difference beyond the
/// emitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Use,
    Technique,
    Utility,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [ActionKind::Use, ActionKind::Technique, ActionKind::Utility];

    /// Maps the legacy numeric menu codes (1, 2, 3).
    pub fn from_code(code: i64) -> Result<Self, MacroError> {
        match code {
            1 => Ok(ActionKind::Use),
            2 => Ok(ActionKind::Technique),
            3 => Ok(ActionKind::Utility),
            other => Err(MacroError::UnknownActionCode(other)),
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            ActionKind::Use => "use",
            ActionKind::Technique => "technique",
            ActionKind::Utility => "utility",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

impl FromStr for ActionKind {
    type Err = MacroError;

    /// Accepts either the verb (`"technique"`) or its legacy code (`"2"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_code(code);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.verb().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MacroError::UnknownActionKind(trimmed.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Ability
// ---------------------------------------------------------------------------

fn default_has_gcd() -> bool {
    true
}

/// One castable action. The persisted fields use the spellbook's JSON names;
/// `elapsed_since_cast` is runtime-only and never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub cast_time: f64,
    #[serde(rename = "type")]
    pub kind: ActionKind,
    /// Action-bar location. Opaque to the scheduler.
    #[serde(rename = "location")]
    pub slot: u32,
    #[serde(default)]
    pub cooldown: f64,
    /// Carried through from the spellbook; the scheduler applies the global
    /// cooldown floor to every cast regardless of this flag.
    #[serde(rename = "has_gcd", default = "default_has_gcd")]
    pub participates_in_shared_lock: bool,
    /// Seconds since the last cast in the current run. `None` until first cast.
    #[serde(skip)]
    pub(crate) elapsed_since_cast: Option<f64>,
}
