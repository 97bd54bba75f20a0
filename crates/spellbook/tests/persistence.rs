//! Filesystem round-trips for spellbooks and macro files.

use macro_core::test_fixtures::{cooldown_only_spells, warrior_spells};
use macro_core::{build, validate_ranking, ActionKind};
use spellbook::{load_spellbook, save_spellbook, write_macro, Spellbook};

fn warrior_book() -> Spellbook {
    Spellbook {
        class_name: "Warrior".to_string(),
        spells: warrior_spells(),
    }
}

#[test]
fn save_then_load_preserves_spell_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("warrior.json");
    let book = warrior_book();

    save_spellbook(&path, &book).unwrap();
    let loaded = load_spellbook(&path).unwrap();

    assert_eq!(loaded.class_name, "Warrior");
    assert_eq!(loaded.spells.len(), book.spells.len());
    for (saved, restored) in book.spells.iter().zip(&loaded.spells) {
        assert_eq!(saved.name, restored.name);
        assert!((saved.cast_time - restored.cast_time).abs() < 1e-12);
        assert_eq!(saved.kind, restored.kind);
        assert_eq!(saved.slot, restored.slot);
        assert!((saved.cooldown - restored.cooldown).abs() < 1e-12);
        assert_eq!(
            saved.participates_in_shared_lock,
            restored.participates_in_shared_lock
        );
    }
}

#[test]
fn save_excludes_runtime_timing_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mage.json");
    let mut book = Spellbook {
        class_name: "Mage".to_string(),
        spells: cooldown_only_spells(),
    };
    book.spells[0].mark_cast();
    book.spells[0].advance(2.0);

    save_spellbook(&path, &book).unwrap();
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("elapsed"), "{raw}");

    let loaded = load_spellbook(&path).unwrap();
    assert_eq!(loaded.spells[0].elapsed_since_cast(), None);
}

#[test]
fn save_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books").join("classes").join("monk.json");
    save_spellbook(&path, &Spellbook::new("Monk")).unwrap();
    assert_eq!(load_spellbook(&path).unwrap().spells.len(), 0);
}

#[test]
fn save_refuses_book_that_would_not_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("warrior.json");
    let mut book = warrior_book();
    book.add_spell(macro_core::Ability::new("", 1.0, ActionKind::Use, 5));

    let err = save_spellbook(&path, &book).unwrap_err();
    assert!(format!("{err:#}").contains("empty name"), "{err:#}");
    assert!(!path.exists());
}

#[test]
fn loads_hand_written_spellbook_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cleric.json");
    std::fs::write(
        &path,
        r#"{
    "class_name": "Cleric",
    "spells": [
        {"name": "Smite", "cast_time": 1.5, "type": "use", "location": 1, "cooldown": 0.0, "has_gcd": true},
        {"name": "Ward", "cast_time": 0.0, "type": "utility", "location": 8}
    ]
}"#,
    )
    .unwrap();

    let book = load_spellbook(&path).unwrap();
    assert_eq!(book.spells[1].kind, ActionKind::Utility);
    assert!(book.spells[1].cooldown.abs() < f64::EPSILON);
    assert!(book.spells[1].participates_in_shared_lock);
}

#[test]
fn load_rejects_unknown_spell_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"{"class_name": "Bard", "spells": [{"name": "Song", "cast_time": 1.0, "type": "melody", "location": 1}]}"#,
    )
    .unwrap();

    let err = load_spellbook(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parsing spellbook"), "{err:#}");
}

#[test]
fn load_rejects_negative_cooldown() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"{"class_name": "Bard", "spells": [{"name": "Song", "cast_time": 1.0, "type": "use", "location": 1, "cooldown": -3.0}]}"#,
    )
    .unwrap();

    let err = load_spellbook(&path).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("validating spellbook"), "{message}");
    assert!(message.contains("invalid cooldown"), "{message}");
}

#[test]
fn load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nowhere.json");
    let err = load_spellbook(&path).unwrap_err();
    assert!(err.to_string().contains("nowhere.json"), "{err}");
}

#[test]
fn ranked_build_writes_macro_file() {
    let dir = tempfile::tempdir().unwrap();
    let book = Spellbook {
        class_name: "Mage".to_string(),
        spells: cooldown_only_spells(),
    };
    let ranked = validate_ranking(&[0, 1], book.spells.len()).unwrap();
    let mut rotation = ranked.resolve(&book.spells).unwrap();
    let run = build(&mut rotation, 3, true).unwrap();

    let path = dir.path().join("out").join("mage.macro");
    write_macro(&path, &run.log).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "# Casting: Arcane Burst\n/use 1\n/wait 1.1\n\
         # Casting: Frost Lance\n/technique 2\n/wait 5.0\n\
         # Casting: Arcane Burst\n/use 1\n/wait 1.1\n"
    );
}
