//! Shared test fixtures for macro_core and downstream crates.
//!
//! `warrior_spells()` is a small but complete spellbook: a spammable filler,
//! two cooldown abilities and a utility that ignores the global lock.

use crate::{Ability, ActionKind};

pub fn warrior_spells() -> Vec<Ability> {
    vec![
        Ability::new("Heroic Strike", 1.0, ActionKind::Use, 1),
        Ability::new("Mortal Blow", 1.5, ActionKind::Technique, 2).with_cooldown(6.0),
        Ability::new("Whirlwind", 2.0, ActionKind::Technique, 3).with_cooldown(10.0),
        Ability::new("Battle Shout", 0.0, ActionKind::Utility, 9)
            .with_cooldown(30.0)
            .with_gcd(false),
    ]
}

/// Every ability has a cooldown, so a rotation of these stalls once all of
/// them have been cast.
pub fn cooldown_only_spells() -> Vec<Ability> {
    vec![
        Ability::new("Arcane Burst", 1.0, ActionKind::Use, 1).with_cooldown(5.0),
        Ability::new("Frost Lance", 2.0, ActionKind::Technique, 2).with_cooldown(5.0),
    ]
}

/// Slots of the cast lines of a run, in order.
pub fn cast_slots(log: &crate::ActionLog) -> Vec<u32> {
    log.directives()
        .iter()
        .filter_map(|d| match d {
            crate::Directive::Cast { slot, .. } => Some(*slot),
            _ => None,
        })
        .collect()
}

/// Wait durations of a run, in order.
pub fn waits(log: &crate::ActionLog) -> Vec<f64> {
    log.directives()
        .iter()
        .filter_map(|d| match d {
            crate::Directive::Wait(seconds) => Some(*seconds),
            _ => None,
        })
        .collect()
}
