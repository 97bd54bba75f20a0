use crate::Spellbook;

const RULE_WIDTH: usize = 80;

/// Fixed-width listing of a spellbook; the `id` column is the index a
/// ranking refers to.
pub fn format_spell_table(book: &Spellbook) -> String {
    let mut out = String::new();
    push_row(
        &mut out,
        ["id", "Name", "Cast Time", "Type", "Location", "Cooldown", "Has GCD"],
    );
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for (index, spell) in book.spells.iter().enumerate() {
        push_row(
            &mut out,
            [
                &index.to_string(),
                &spell.name,
                &format!("{:.1}", spell.cast_time),
                spell.kind.verb(),
                &spell.slot.to_string(),
                &format!("{:.1}", spell.cooldown),
                if spell.participates_in_shared_lock {
                    "yes"
                } else {
                    "no"
                },
            ],
        );
    }
    out
}

fn push_row(out: &mut String, cells: [&str; 7]) {
    let [id, name, cast_time, kind, location, cooldown, gcd] = cells;
    let line = format!(
        "{id:<3}{name:<20}{cast_time:<15}{kind:<15}{location:<10}{cooldown:<10}{gcd:<10}"
    );
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use macro_core::test_fixtures::warrior_spells;

    #[test]
    fn lists_every_spell_with_its_index() {
        let book = Spellbook {
            class_name: "Warrior".to_string(),
            spells: warrior_spells(),
        };
        let table = format_spell_table(&book);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2 + book.spells.len());
        assert!(lines[0].starts_with("id Name"));
        assert_eq!(lines[1], "-".repeat(80));
        assert_eq!(
            lines[3],
            "1  Mortal Blow         1.5            technique      2         6.0       yes"
        );
        assert!(lines[5].ends_with("no"));
    }

    #[test]
    fn empty_spellbook_has_header_only() {
        let table = format_spell_table(&Spellbook::new("Monk"));
        assert_eq!(table.lines().count(), 2);
    }
}
