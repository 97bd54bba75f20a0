//! Spellbook persistence and macro output shared by the CLI and tests.
//!
//! Everything that touches the filesystem lives here; `macro_core` stays
//! free of IO.

mod table;

use anyhow::{Context, Result};
use macro_core::{Ability, ActionLog, MacroError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

pub use table::format_spell_table;

/// A class's full set of spells, in entry order. Ranking indices refer to
/// positions in `spells`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spellbook {
    pub class_name: String,
    pub spells: Vec<Ability>,
}

impl Spellbook {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            spells: Vec::new(),
        }
    }

    pub fn add_spell(&mut self, spell: Ability) {
        self.spells.push(spell);
    }
}

/// Checks every spell's numeric invariants and that names are present.
///
/// Duplicate names are allowed but logged: the scheduler tells spells apart
/// by position, the player reading the macro cannot.
pub fn validate_spellbook(book: &Spellbook) -> Result<(), MacroError> {
    let mut seen = HashSet::new();
    for (index, spell) in book.spells.iter().enumerate() {
        if spell.name.trim().is_empty() {
            return Err(MacroError::InvalidInput(format!(
                "spell {index} in '{}' has an empty name",
                book.class_name
            )));
        }
        spell.validate()?;
        if !seen.insert(spell.name.as_str()) {
            tracing::warn!(
                class = %book.class_name,
                spell = %spell.name,
                "duplicate spell name"
            );
        }
    }
    Ok(())
}

pub fn load_spellbook(path: impl AsRef<Path>) -> Result<Spellbook> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading spellbook: {}", path.display()))?;
    let book: Spellbook = serde_json::from_str(&json)
        .with_context(|| format!("parsing spellbook: {}", path.display()))?;
    validate_spellbook(&book)
        .with_context(|| format!("validating spellbook: {}", path.display()))?;
    tracing::info!(
        class = %book.class_name,
        spells = book.spells.len(),
        path = %path.display(),
        "spellbook loaded"
    );
    Ok(book)
}

/// Writes the spellbook as pretty JSON. Runtime timing state is never
/// persisted. A book that would fail [`load_spellbook`] is rejected before
/// the file is touched.
pub fn save_spellbook(path: impl AsRef<Path>, book: &Spellbook) -> Result<()> {
    let path = path.as_ref();
    validate_spellbook(book)
        .with_context(|| format!("validating spellbook: {}", path.display()))?;
    create_parent_dir(path)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating spellbook: {}", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, book)
        .with_context(|| format!("writing spellbook: {}", path.display()))?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .with_context(|| format!("flushing spellbook: {}", path.display()))?;
    tracing::info!(
        class = %book.class_name,
        spells = book.spells.len(),
        path = %path.display(),
        "spellbook saved"
    );
    Ok(())
}

/// Writes the macro, one directive per line, in a single buffered write.
pub fn write_macro(path: impl AsRef<Path>, log: &ActionLog) -> Result<()> {
    let path = path.as_ref();
    create_parent_dir(path)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating macro file: {}", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    writer
        .write_all(log.render().as_bytes())
        .and_then(|()| writer.flush())
        .with_context(|| format!("writing macro file: {}", path.display()))?;
    tracing::info!(
        lines = log.len(),
        casts = log.cast_count(),
        path = %path.display(),
        "macro written"
    );
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory: {}", parent.display())),
        _ => Ok(()),
    }
}
