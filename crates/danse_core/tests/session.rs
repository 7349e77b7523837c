use std::path::PathBuf;

use danse_core::ability::Ability;
use danse_core::core_api::{Engine, LoadFailureCode, Session};
use danse_core::skill::Skill;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn fixture_path(name: &str) -> PathBuf {
    workspace_root().join(format!("tests/fixtures/{name}.json"))
}

fn open_fixture(name: &str) -> Session {
    Engine::new()
        .open_path(fixture_path(name))
        .expect("fixture should load")
}

fn open_json(json: &str) -> Session {
    Engine::new().open_str(json).expect("json should load")
}

#[test]
fn armor_class_uses_dexterity_by_default() {
    let session = open_json(r#"{ "caracteristiques": { "DEXTERITE": 14 } }"#);
    assert!(!session.uses_predictive_defense());
    assert_eq!(session.armor_class(), 12);
}

#[test]
fn predictive_defense_switches_armor_class_to_intelligence() {
    let session = open_json(
        r#"{
            "caracteristiques": { "DEXTERITE": 14, "INTELLIGENCE": 18 },
            "capacitesActives": [{ "nom": "Défense prédictive", "niveau": 1 }]
        }"#,
    );
    assert!(session.uses_predictive_defense());
    assert_eq!(session.armor_class(), 14);
}

#[test]
fn predictive_defense_needs_exact_name() {
    let session = open_json(
        r#"{
            "caracteristiques": { "DEXTERITE": 14, "INTELLIGENCE": 18 },
            "capacitesActives": [{ "nom": "défense prédictive", "niveau": 1 }]
        }"#,
    );
    assert!(!session.uses_predictive_defense());
    assert_eq!(session.armor_class(), 12);
}

#[test]
fn skill_modifier_adds_mastery_when_mastered() {
    let plain = open_json(r#"{ "caracteristiques": { "FORCE": 16 }, "bonusMaitrise": 2 }"#);
    assert_eq!(plain.skill_modifier(Skill::Athletisme), 3);

    let mastered = open_json(
        r#"{
            "caracteristiques": { "FORCE": 16 },
            "bonusMaitrise": 2,
            "competencesMaitrisees": ["ATHLÉTISME"]
        }"#,
    );
    assert!(mastered.is_skill_mastered(Skill::Athletisme));
    assert_eq!(mastered.skill_modifier(Skill::Athletisme), 5);
}

#[test]
fn save_modifier_defaults_to_zero() {
    let session = open_json("{}");
    assert_eq!(session.save_modifier(Ability::Constitution), 0);
    assert!(!session.is_save_mastered(Ability::Constitution));
}

#[test]
fn missing_values_resolve_to_defaults() {
    let session = open_json("{}");
    for entry in session.abilities() {
        assert_eq!(entry.score, 10);
        assert_eq!(entry.modifier, 0);
    }
    assert_eq!(session.mastery_bonus(), 2);
    assert_eq!(session.hit_points(), 8);
    assert_eq!(session.display_name(), "Personnage");
    assert_eq!(session.power_difficulty(), None);
    assert!(session.weapons().is_empty());
    assert!(session.actions().bonus_actions.is_empty());
}

#[test]
fn null_values_read_as_missing() {
    let session = open_json(
        r#"{
            "caracteristiques": null,
            "competencesMaitrisees": null,
            "sauvegardesMaitrisees": null,
            "capacitesActives": [{ "nom": "Lame spectrale", "niveau": null, "resume": null }],
            "capacitesPassives": null,
            "immunites": null,
            "equipement": { "armure": { "nom": "Robe", "bonusCA": null, "modificateur": null }, "armes": null },
            "jetDeSauvegarde": { "baseDD": null, "modificateur": null, "ajouterBonusDeMaitrise": null }
        }"#,
    );

    assert_eq!(session.score(Ability::Force), 10);
    assert_eq!(session.skill_modifier(Skill::Arcanes), 0);
    assert_eq!(session.sheet().active_abilities[0].level, 0);
    assert!(session.sheet().passive_abilities.is_empty());
    assert!(session.weapons().is_empty());
    let armor = session.armor().expect("armor should be equipped");
    assert_eq!(armor.effective_ac, 0);
    assert_eq!(session.power_difficulty(), Some(8));
}

#[test]
fn padded_ability_keys_still_resolve() {
    let session = open_json(r#"{ "caracteristiques": { " force ": 16 } }"#);
    assert_eq!(session.score(Ability::Force), 16);
}

#[test]
fn extreme_bonuses_saturate_instead_of_overflowing() {
    let session = open_json(
        r#"{
            "caracteristiques": { "FORCE": 30, "DEXTERITE": 20, "INTELLIGENCE": 2147483647 },
            "bonusMaitrise": 2147483647,
            "competencesMaitrisees": ["Athlétisme"],
            "sauvegardesMaitrisees": ["FORCE"],
            "equipement": { "armure": { "nom": "Plates", "type": "Lourde", "bonusCA": 2147483647, "modificateur": "DEXTERITE" } },
            "jetDeSauvegarde": { "baseDD": 2147483647, "modificateur": "INTELLIGENCE", "ajouterBonusDeMaitrise": true }
        }"#,
    );

    assert_eq!(session.skill_modifier(Skill::Athletisme), i32::MAX);
    assert_eq!(session.save_modifier(Ability::Force), i32::MAX);
    assert_eq!(session.power_difficulty(), Some(i32::MAX));
    let armor = session.armor().expect("armor should be equipped");
    assert_eq!(armor.effective_ac, i32::MAX);

    let low = open_json(
        r#"{
            "caracteristiques": { "FORCE": -2147483648 },
            "bonusMaitrise": -2147483648,
            "competencesMaitrisees": ["Athlétisme"]
        }"#,
    );
    assert_eq!(low.skill_modifier(Skill::Athletisme), i32::MIN);
}

#[test]
fn no_armor_is_distinct_from_zero_bonus() {
    let none = open_json("{}");
    assert!(none.armor().is_none());

    let zero = open_json(
        r#"{ "equipement": { "armure": { "nom": "Robe", "type": "Tissu", "bonusCA": 0, "modificateur": "DEXTERITE" } } }"#,
    );
    let armor = zero.armor().expect("armor should be equipped");
    assert_eq!(armor.effective_ac, 0);
}

#[test]
fn unknown_governing_ability_reads_default_score() {
    let session = open_json(
        r#"{
            "caracteristiques": { "FORCE": 18 },
            "equipement": { "armes": [{ "nom": "Fouet", "type": "Corps à corps", "degats": "1d4", "carac": "CHANCE", "portee": "3 m" }] }
        }"#,
    );
    assert_eq!(session.weapons()[0].attack_modifier, 0);
    assert_eq!(session.weapons()[0].damage_display(), "1d4 +0");
}

#[test]
fn power_difficulty_defaults_base_to_eight() {
    let session = open_json(
        r#"{
            "caracteristiques": { "sagesse": 16 },
            "bonusMaitrise": 3,
            "jetDeSauvegarde": { "modificateur": "Sagesse", "ajouterBonusDeMaitrise": true }
        }"#,
    );
    assert_eq!(session.power_difficulty(), Some(8 + 3 + 3));

    let without_bonus = open_json(
        r#"{
            "caracteristiques": { "sagesse": 16 },
            "jetDeSauvegarde": { "baseDD": 10, "modificateur": "SAGESSE" }
        }"#,
    );
    assert_eq!(without_bonus.power_difficulty(), Some(13));
}

#[test]
fn fixture_derives_full_sheet() {
    let session = open_fixture("arkanis");
    assert_eq!(session.display_name(), "Arkanis");

    let combat = session.combat();
    assert_eq!(combat.armor_class, 14);
    assert!(combat.uses_predictive_defense);
    assert_eq!(combat.hit_points, 9);
    assert_eq!(combat.initiative, 2);
    assert_eq!(combat.speed, "9 m");
    assert_eq!(combat.hit_die, "1d8");
    assert_eq!(combat.mastery_bonus, 2);

    assert_eq!(session.skill_modifier(Skill::Arcanes), 6);
    assert_eq!(session.skill_modifier(Skill::Perception), 3);
    assert_eq!(session.skill_modifier(Skill::Athletisme), -1);
    assert_eq!(session.save_modifier(Ability::Intelligence), 6);
    assert_eq!(session.save_modifier(Ability::Charisme), -1);
    assert_eq!(session.power_difficulty(), Some(14));

    let armor = session.armor().expect("fixture wears armor");
    assert_eq!(armor.effective_ac, 13);

    let weapons = session.weapons();
    assert_eq!(weapons.len(), 2);
    assert_eq!(weapons[0].damage_display(), "1d4 +2");
    assert_eq!(weapons[1].damage_display(), "1d6 -1");

    let actions = session.actions();
    let bonus: Vec<&str> = actions
        .bonus_actions
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(bonus, vec!["Lame spectrale"]);
    assert_eq!(actions.other.len(), 2);
}

#[test]
fn queries_are_idempotent() {
    let session = open_fixture("arkanis");
    assert_eq!(session.skills(), session.skills());
    assert_eq!(session.saves(), session.saves());
    assert_eq!(session.combat(), session.combat());
}

#[test]
fn missing_file_is_a_load_failure() {
    let err = Engine::new()
        .open_path(fixture_path("does-not-exist"))
        .expect_err("missing file should fail");
    assert_eq!(err.code(), LoadFailureCode::Io);
    assert!(err.to_string().contains("does-not-exist"));
}

#[test]
fn malformed_json_is_a_load_failure() {
    let err = Engine::new()
        .open_path(fixture_path("malformed"))
        .expect_err("malformed json should fail");
    assert_eq!(err.code(), LoadFailureCode::Parse);
}
