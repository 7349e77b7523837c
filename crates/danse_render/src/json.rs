use danse_core::core_api::{ArmorEntry, Session, WeaponEntry};
use danse_core::sheet::ActiveAbility;
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::{FieldSelection, JsonStyle, OTHER_ACTIONS, OTHER_BONUS_ACTIONS};

pub fn render_json_full(session: &Session, style: JsonStyle) -> JsonValue {
    render_json_selected(session, &FieldSelection::all(), style)
}

pub fn render_json_selected(
    session: &Session,
    fields: &FieldSelection,
    style: JsonStyle,
) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(selected_json(fields, session)),
    }
}

pub fn render_json_string(value: &JsonValue) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

fn selected_json(fields: &FieldSelection, session: &Session) -> JsonMap<String, JsonValue> {
    let sheet = session.sheet();
    let mut out = JsonMap::new();

    if fields.name {
        out.insert(
            "name".to_string(),
            JsonValue::String(session.display_name().to_string()),
        );
    }
    if fields.armor_class {
        out.insert(
            "armor_class".to_string(),
            JsonValue::from(session.armor_class()),
        );
        out.insert(
            "uses_predictive_defense".to_string(),
            JsonValue::Bool(session.uses_predictive_defense()),
        );
    }
    if fields.hit_points {
        out.insert(
            "hit_points".to_string(),
            JsonValue::from(session.hit_points()),
        );
    }
    if fields.initiative {
        out.insert(
            "initiative".to_string(),
            JsonValue::from(session.initiative()),
        );
    }
    if fields.speed {
        out.insert(
            "speed".to_string(),
            JsonValue::String(session.combat().speed),
        );
    }
    if fields.hit_die {
        out.insert(
            "hit_die".to_string(),
            JsonValue::String(session.combat().hit_die),
        );
    }
    if fields.mastery {
        out.insert(
            "mastery_bonus".to_string(),
            JsonValue::from(session.mastery_bonus()),
        );
    }
    if fields.abilities {
        out.insert("abilities".to_string(), abilities_to_json(session));
    }
    if fields.saves {
        out.insert("saves".to_string(), saves_to_json(session));
    }
    if fields.power_difficulty {
        out.insert(
            "power_difficulty".to_string(),
            match session.power_difficulty() {
                Some(v) => JsonValue::from(v),
                None => JsonValue::Null,
            },
        );
    }
    if fields.skills {
        out.insert("skills".to_string(), skills_to_json(session));
    }
    if fields.capacities {
        out.insert(
            "capacities".to_string(),
            JsonValue::Array(sheet.active_abilities.iter().map(active_to_json).collect()),
        );
    }
    if fields.traits {
        out.insert(
            "traits".to_string(),
            JsonValue::Array(
                sheet
                    .passive_abilities
                    .iter()
                    .map(|p| {
                        let mut m = JsonMap::new();
                        m.insert("name".to_string(), JsonValue::String(p.name.clone()));
                        m.insert("description".to_string(), optional_string(&p.description));
                        JsonValue::Object(m)
                    })
                    .collect(),
            ),
        );
    }
    if fields.defenses {
        out.insert("immunities".to_string(), strings_to_json(&sheet.immunities));
        out.insert(
            "resistances".to_string(),
            strings_to_json(&sheet.resistances),
        );
    }
    if fields.progression {
        out.insert(
            "progression".to_string(),
            JsonValue::Array(
                sheet
                    .future_abilities
                    .iter()
                    .map(|f| {
                        let mut m = JsonMap::new();
                        m.insert("name".to_string(), JsonValue::String(f.name.clone()));
                        m.insert("level".to_string(), JsonValue::from(f.level));
                        m.insert("source".to_string(), JsonValue::String(f.source.clone()));
                        JsonValue::Object(m)
                    })
                    .collect(),
            ),
        );
    }
    if fields.armor {
        out.insert(
            "armor".to_string(),
            match session.armor() {
                Some(armor) => armor_to_json(&armor),
                None => JsonValue::Null,
            },
        );
    }
    if fields.weapons {
        out.insert(
            "weapons".to_string(),
            JsonValue::Array(session.weapons().iter().map(weapon_to_json).collect()),
        );
    }
    if fields.actions {
        out.insert("actions".to_string(), actions_to_json(session));
    }

    out
}

fn abilities_to_json(session: &Session) -> JsonValue {
    JsonValue::Array(
        session
            .abilities()
            .iter()
            .map(|a| {
                let mut m = JsonMap::new();
                m.insert(
                    "ability".to_string(),
                    JsonValue::String(a.ability.as_str().to_string()),
                );
                m.insert(
                    "abbreviation".to_string(),
                    JsonValue::String(a.ability.abbreviation().to_string()),
                );
                m.insert("score".to_string(), JsonValue::from(a.score));
                m.insert("modifier".to_string(), JsonValue::from(a.modifier));
                JsonValue::Object(m)
            })
            .collect(),
    )
}

fn saves_to_json(session: &Session) -> JsonValue {
    JsonValue::Array(
        session
            .saves()
            .iter()
            .map(|s| {
                let mut m = JsonMap::new();
                m.insert(
                    "ability".to_string(),
                    JsonValue::String(s.ability.as_str().to_string()),
                );
                m.insert("modifier".to_string(), JsonValue::from(s.modifier));
                m.insert("mastered".to_string(), JsonValue::Bool(s.mastered));
                JsonValue::Object(m)
            })
            .collect(),
    )
}

fn skills_to_json(session: &Session) -> JsonValue {
    JsonValue::Array(
        session
            .skills()
            .iter()
            .map(|s| {
                let mut m = JsonMap::new();
                m.insert(
                    "name".to_string(),
                    JsonValue::String(s.skill.name().to_string()),
                );
                m.insert(
                    "ability".to_string(),
                    JsonValue::String(s.ability.as_str().to_string()),
                );
                m.insert("modifier".to_string(), JsonValue::from(s.modifier));
                m.insert("mastered".to_string(), JsonValue::Bool(s.mastered));
                JsonValue::Object(m)
            })
            .collect(),
    )
}

fn active_to_json(active: &ActiveAbility) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("name".to_string(), JsonValue::String(active.name.clone()));
    m.insert("level".to_string(), JsonValue::from(active.level));
    m.insert("summary".to_string(), optional_string(&active.summary));
    m.insert(
        "description".to_string(),
        optional_string(&active.description),
    );
    JsonValue::Object(m)
}

fn armor_to_json(armor: &ArmorEntry) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("name".to_string(), JsonValue::String(armor.name.clone()));
    m.insert("type".to_string(), JsonValue::String(armor.kind.clone()));
    m.insert("ac_bonus".to_string(), JsonValue::from(armor.ac_bonus));
    m.insert(
        "governing_ability".to_string(),
        JsonValue::String(armor.governing_ability.clone()),
    );
    m.insert("modifier".to_string(), JsonValue::from(armor.modifier));
    m.insert(
        "effective_ac".to_string(),
        JsonValue::from(armor.effective_ac),
    );
    JsonValue::Object(m)
}

fn weapon_to_json(weapon: &WeaponEntry) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("name".to_string(), JsonValue::String(weapon.name.clone()));
    m.insert("type".to_string(), JsonValue::String(weapon.kind.clone()));
    m.insert("damage".to_string(), JsonValue::String(weapon.damage.clone()));
    m.insert(
        "governing_ability".to_string(),
        JsonValue::String(weapon.governing_ability.clone()),
    );
    m.insert(
        "attack_modifier".to_string(),
        JsonValue::from(weapon.attack_modifier),
    );
    m.insert(
        "damage_display".to_string(),
        JsonValue::String(weapon.damage_display()),
    );
    m.insert("range".to_string(), JsonValue::String(weapon.range.clone()));
    JsonValue::Object(m)
}

fn actions_to_json(session: &Session) -> JsonValue {
    let actions = session.actions();
    let mut m = JsonMap::new();
    m.insert(
        "bonus_actions".to_string(),
        JsonValue::Array(actions.bonus_actions.iter().map(active_to_json).collect()),
    );
    m.insert(
        "other_actions".to_string(),
        JsonValue::Array(
            OTHER_ACTIONS
                .iter()
                .map(|a| JsonValue::String((*a).to_string()))
                .collect(),
        ),
    );
    m.insert(
        "other_bonus_actions".to_string(),
        JsonValue::Array(
            OTHER_BONUS_ACTIONS
                .iter()
                .map(|a| JsonValue::String((*a).to_string()))
                .collect(),
        ),
    );
    JsonValue::Object(m)
}

fn strings_to_json(values: &[String]) -> JsonValue {
    JsonValue::Array(values.iter().cloned().map(JsonValue::String).collect())
}

fn optional_string(value: &Option<String>) -> JsonValue {
    match value {
        Some(v) => JsonValue::String(v.clone()),
        None => JsonValue::Null,
    }
}
