//! Turning user-entered spell indices into a priority order.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::Ability;

/// Spellbook indices in priority order (highest first). Non-empty, no
/// duplicates, every index below the pool size it was validated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRotation(Vec<usize>);

impl RankedRotation {
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Copies the ranked spells out of `spells` with their timing state
    /// cleared, ready for a fresh scheduling run.
    pub fn resolve(&self, spells: &[Ability]) -> Result<Vec<Ability>, ValidationError> {
        self.0
            .iter()
            .map(|&index| {
                spells
                    .get(index)
                    .map(|spell| {
                        let mut ability = spell.clone();
                        ability.reset();
                        ability
                    })
                    .ok_or(ValidationError::OutOfRange {
                        index,
                        pool_size: spells.len(),
                    })
            })
            .collect()
    }
}

/// Splits whitespace-separated indices, e.g. `"2 0 1"`.
pub fn parse_ranking(input: &str) -> Result<Vec<usize>, ValidationError> {
    input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| ValidationError::NotAnIndex(token.to_string()))
        })
        .collect()
}

/// Repeated indices keep their first position; later repeats are dropped
/// with a warning.
pub fn validate_ranking(
    indices: &[usize],
    pool_size: usize,
) -> Result<RankedRotation, ValidationError> {
    let mut seen = HashSet::new();
    let mut ranked = Vec::with_capacity(indices.len());
    for &index in indices {
        if index >= pool_size {
            return Err(ValidationError::OutOfRange { index, pool_size });
        }
        if seen.insert(index) {
            ranked.push(index);
        } else {
            tracing::warn!(index, "duplicate spell index ignored");
        }
    }
    if ranked.is_empty() {
        return Err(ValidationError::EmptyRanking);
    }
    Ok(RankedRotation(ranked))
}
