use danse_core::normalize::{normalize_ability_scores, normalized};
use danse_core::sheet::CharacterSheet;
use proptest::prelude::*;

fn sheet_with_scores(json: &str) -> CharacterSheet {
    serde_json::from_str(json).expect("sheet json should parse")
}

#[test]
fn uppercases_mixed_case_keys() {
    let sheet = normalized(sheet_with_scores(
        r#"{ "caracteristiques": { "force": 16, "Dexterite": 14 } }"#,
    ));

    let keys: Vec<&str> = sheet.ability_scores.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["FORCE", "DEXTERITE"]);
    assert_eq!(sheet.ability_scores["FORCE"], 16);
    assert_eq!(sheet.ability_scores["DEXTERITE"], 14);
}

#[test]
fn leaves_other_fields_untouched() {
    let raw = sheet_with_scores(
        r#"{
            "nom": "Test",
            "caracteristiques": { "sagesse": 12 },
            "bonusMaitrise": 3,
            "immunites": ["Poison"]
        }"#,
    );
    let sheet = normalized(raw.clone());

    assert_eq!(sheet.name, raw.name);
    assert_eq!(sheet.proficiency_bonus, Some(3));
    assert_eq!(sheet.immunities, vec!["Poison".to_string()]);
}

#[test]
fn empty_mapping_stays_empty() {
    let mut sheet = CharacterSheet::default();
    normalize_ability_scores(&mut sheet);
    assert!(sheet.ability_scores.is_empty());
}

#[test]
fn trims_surrounding_whitespace_from_keys() {
    let sheet = normalized(sheet_with_scores(
        r#"{ "caracteristiques": { " force": 16, "sagesse\t": 12 } }"#,
    ));

    let keys: Vec<&str> = sheet.ability_scores.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["FORCE", "SAGESSE"]);
}

#[test]
fn later_key_wins_on_collision() {
    let sheet = normalized(sheet_with_scores(
        r#"{ "caracteristiques": { "FORCE": 10, "force": 18 } }"#,
    ));
    assert_eq!(sheet.ability_scores.len(), 1);
    assert_eq!(sheet.ability_scores["FORCE"], 18);
}

#[test]
fn normalizing_twice_is_a_no_op() {
    let once = normalized(sheet_with_scores(
        r#"{ "caracteristiques": { "charisme": 9, "Intelligence": 18 } }"#,
    ));
    let twice = normalized(once.clone());
    assert_eq!(once, twice);
}

proptest! {
    #[test]
    fn normalizer_is_a_fixed_point(
        scores in proptest::collection::vec(("[a-zA-Z]{1,12}", 1i32..30), 0..8)
    ) {
        let mut sheet = CharacterSheet::default();
        for (key, score) in scores {
            sheet.ability_scores.insert(key, score);
        }

        let once = normalized(sheet);
        prop_assert!(once.ability_scores.keys().all(|k| *k == k.to_uppercase()));
        let twice = normalized(once.clone());
        prop_assert_eq!(once, twice);
    }
}
