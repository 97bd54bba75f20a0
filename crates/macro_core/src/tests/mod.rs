use super::*;
use crate::test_fixtures::{cast_slots, cooldown_only_spells, warrior_spells, waits};


// --- Shared test helpers ------------------------------------------------

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn assert_waits(log: &ActionLog, expected: &[f64]) {
    let actual = waits(log);
    assert_eq!(
        actual.len(),
        expected.len(),
        "wait count mismatch: {actual:?} vs {expected:?}"
    );
    for (a, e) in actual.iter().zip(expected) {
        assert!(approx(*a, *e), "waits {actual:?} != {expected:?}");
    }
}

/// The warrior spellbook ranked Whirlwind > Mortal Blow > Heroic Strike.
fn warrior_rotation() -> Vec<Ability> {
    let spells = warrior_spells();
    vec![spells[2].clone(), spells[1].clone(), spells[0].clone()]
}
