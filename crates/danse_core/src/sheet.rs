//! Character document as it appears on disk.
//!
//! Keys follow the French names used by the character files
//! (`caracteristiques`, `bonusMaitrise`, ...). Every collection defaults to
//! empty and every scalar with a rules default stays optional here; defaults
//! are applied once when a [`Session`](crate::core_api::Session) is built.
//! An explicit `null` reads the same as a missing key.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSheet {
    #[serde(rename = "nom", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ability name to score. Keys may arrive in any case until normalized.
    #[serde(rename = "caracteristiques", deserialize_with = "null_as_default")]
    pub ability_scores: IndexMap<String, i32>,
    #[serde(rename = "bonusMaitrise", skip_serializing_if = "Option::is_none")]
    pub proficiency_bonus: Option<i32>,
    #[serde(rename = "competencesMaitrisees", deserialize_with = "null_as_default")]
    pub mastered_skills: Vec<String>,
    #[serde(rename = "sauvegardesMaitrisees", deserialize_with = "null_as_default")]
    pub mastered_saves: Vec<String>,
    #[serde(rename = "capacitesActives", deserialize_with = "null_as_default")]
    pub active_abilities: Vec<ActiveAbility>,
    #[serde(rename = "capacitesPassives", deserialize_with = "null_as_default")]
    pub passive_abilities: Vec<PassiveAbility>,
    #[serde(rename = "capacitesFutures", deserialize_with = "null_as_default")]
    pub future_abilities: Vec<FutureAbility>,
    #[serde(rename = "immunites", deserialize_with = "null_as_default")]
    pub immunities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub resistances: Vec<String>,
    #[serde(rename = "equipement", deserialize_with = "null_as_default")]
    pub equipment: Equipment,
    #[serde(rename = "jetDeSauvegarde", skip_serializing_if = "Option::is_none")]
    pub saving_throw_rule: Option<SavingThrowRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveAbility {
    #[serde(rename = "nom", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "niveau", deserialize_with = "null_as_default")]
    pub level: u32,
    #[serde(rename = "resume", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassiveAbility {
    #[serde(rename = "nom", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FutureAbility {
    #[serde(rename = "nom", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "niveau", deserialize_with = "null_as_default")]
    pub level: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Equipment {
    #[serde(rename = "armure", skip_serializing_if = "Option::is_none")]
    pub armor: Option<Armor>,
    #[serde(rename = "armes", deserialize_with = "null_as_default")]
    pub weapons: Vec<Weapon>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Armor {
    #[serde(rename = "nom", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(rename = "bonusCA", deserialize_with = "null_as_default")]
    pub ac_bonus: i32,
    #[serde(rename = "modificateur", deserialize_with = "null_as_default")]
    pub governing_ability: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weapon {
    #[serde(rename = "nom", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(rename = "degats", deserialize_with = "null_as_default")]
    pub damage: String,
    #[serde(rename = "carac", deserialize_with = "null_as_default")]
    pub governing_ability: String,
    #[serde(rename = "portee", deserialize_with = "null_as_default")]
    pub range: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingThrowRule {
    #[serde(rename = "baseDD", skip_serializing_if = "Option::is_none")]
    pub base_difficulty: Option<i32>,
    #[serde(rename = "modificateur", deserialize_with = "null_as_default")]
    pub governing_ability: String,
    #[serde(rename = "ajouterBonusDeMaitrise", deserialize_with = "null_as_default")]
    pub add_proficiency_bonus: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
