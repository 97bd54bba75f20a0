use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MacroError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown action code {0}: expected 1 (use), 2 (technique) or 3 (utility)")]
    UnknownActionCode(i64),

    #[error("unknown action kind '{0}': expected 'use', 'technique' or 'utility'")]
    UnknownActionKind(String),

    /// Scheduler reached a state its own loop invariants rule out.
    #[error("scheduler consistency violated: {0}")]
    Inconsistent(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ranking is empty: at least one spell must be ranked")]
    EmptyRanking,

    #[error("spell index {index} is out of range (spellbook has {pool_size} spells)")]
    OutOfRange { index: usize, pool_size: usize },

    #[error("'{0}' is not a spell index")]
    NotAnIndex(String),
}

pub type Result<T> = std::result::Result<T, MacroError>;
