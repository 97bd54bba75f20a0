//! `macro_core` — deterministic rotation scheduling.
//!
//! No IO. Takes a priority-ordered slice of abilities and produces the
//! cast/wait directives of a game macro.

mod ability;
mod action_log;
mod error;
mod ranking;
mod scheduler;
mod types;

#[cfg(any(test, feature = "test-support"))]
pub mod test_fixtures;

pub use action_log::{ActionLog, Directive};
pub use error::{MacroError, Result, ValidationError};
pub use ranking::{parse_ranking, validate_ranking, RankedRotation};
pub use scheduler::{build, build_with, BuildOptions, MacroRun};
pub use types::*;

#[cfg(test)]
mod tests;
