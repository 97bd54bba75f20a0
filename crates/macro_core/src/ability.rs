//! Ability timing — the per-ability half of the cooldown simulation.

use crate::error::MacroError;
use crate::{Ability, ActionKind};

impl Ability {
    /// A fresh, never-cast ability with no cooldown that obeys the global lock.
    pub fn new(name: impl Into<String>, cast_time: f64, kind: ActionKind, slot: u32) -> Self {
        Self {
            name: name.into(),
            cast_time,
            kind,
            slot,
            cooldown: 0.0,
            participates_in_shared_lock: true,
            elapsed_since_cast: None,
        }
    }

    #[must_use]
    pub fn with_cooldown(mut self, cooldown: f64) -> Self {
        self.cooldown = cooldown;
        self
    }

    #[must_use]
    pub fn with_gcd(mut self, participates: bool) -> Self {
        self.participates_in_shared_lock = participates;
        self
    }

    /// Checks the numeric invariants: finite, non-negative cast time and cooldown.
    pub fn validate(&self) -> Result<(), MacroError> {
        if !self.cast_time.is_finite() || self.cast_time < 0.0 {
            return Err(MacroError::InvalidInput(format!(
                "spell '{}' has invalid cast time {}",
                self.name, self.cast_time
            )));
        }
        if !self.cooldown.is_finite() || self.cooldown < 0.0 {
            return Err(MacroError::InvalidInput(format!(
                "spell '{}' has invalid cooldown {}",
                self.name, self.cooldown
            )));
        }
        Ok(())
    }

    pub fn elapsed_since_cast(&self) -> Option<f64> {
        self.elapsed_since_cast
    }

    /// Let `delta` seconds pass. Never-cast abilities stay never-cast.
    pub fn advance(&mut self, delta: f64) {
        if let Some(elapsed) = self.elapsed_since_cast.as_mut() {
            *elapsed += delta;
        }
    }

    pub fn mark_cast(&mut self) {
        self.elapsed_since_cast = Some(0.0);
    }

    /// Forget any cast made in a previous run.
    pub fn reset(&mut self) {
        self.elapsed_since_cast = None;
    }

    pub fn is_ready(&self) -> bool {
        match self.elapsed_since_cast {
            None => true,
            Some(elapsed) => elapsed >= self.cooldown,
        }
    }

    /// Seconds until the cooldown expires, or `None` if never cast.
    ///
    /// Negative once the ability is ready again; callers only ask while it is
    /// still cooling down.
    pub fn remaining_cooldown(&self) -> Option<f64> {
        self.elapsed_since_cast.map(|elapsed| self.cooldown - elapsed)
    }

    /// Time the caster is locked out after firing this ability.
    pub fn cast_delay(&self, global_cooldown_floor: f64) -> f64 {
        global_cooldown_floor.max(self.cast_time)
    }
}
