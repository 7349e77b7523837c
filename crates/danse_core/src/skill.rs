use std::fmt;

use crate::ability::Ability;

pub const SKILL_COUNT: usize = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Skill {
    Athletisme,
    Acrobatie,
    Discretion,
    Escamotage,
    Arcanes,
    Histoire,
    Investigation,
    Nature,
    Religion,
    Dressage,
    Intuition,
    Medecine,
    Perception,
    Survie,
    Intimidation,
    Persuasion,
    Representation,
    Tromperie,
}

// Grouped by governing ability, in ability display order.
static SKILL_TABLE: [(Skill, &str, Ability); SKILL_COUNT] = [
    (Skill::Athletisme, "Athlétisme", Ability::Force),
    (Skill::Acrobatie, "Acrobatie", Ability::Dexterite),
    (Skill::Discretion, "Discrétion", Ability::Dexterite),
    (Skill::Escamotage, "Escamotage", Ability::Dexterite),
    (Skill::Arcanes, "Arcanes", Ability::Intelligence),
    (Skill::Histoire, "Histoire", Ability::Intelligence),
    (Skill::Investigation, "Investigation", Ability::Intelligence),
    (Skill::Nature, "Nature", Ability::Intelligence),
    (Skill::Religion, "Religion", Ability::Intelligence),
    (Skill::Dressage, "Dressage", Ability::Sagesse),
    (Skill::Intuition, "Intuition", Ability::Sagesse),
    (Skill::Medecine, "Médecine", Ability::Sagesse),
    (Skill::Perception, "Perception", Ability::Sagesse),
    (Skill::Survie, "Survie", Ability::Sagesse),
    (Skill::Intimidation, "Intimidation", Ability::Charisme),
    (Skill::Persuasion, "Persuasion", Ability::Charisme),
    (Skill::Representation, "Représentation", Ability::Charisme),
    (Skill::Tromperie, "Tromperie", Ability::Charisme),
];

impl Skill {
    pub fn all() -> impl Iterator<Item = Skill> {
        SKILL_TABLE.iter().map(|(skill, _, _)| *skill)
    }

    /// Skills governed by `ability`, in table order. Empty for CONSTITUTION.
    pub fn governed_by(ability: Ability) -> impl Iterator<Item = Skill> {
        SKILL_TABLE
            .iter()
            .filter(move |(_, _, governing)| *governing == ability)
            .map(|(skill, _, _)| *skill)
    }

    /// Case-insensitive lookup by display name. Accents must match.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        SKILL_TABLE
            .iter()
            .find(|(_, display, _)| display.to_lowercase() == lower)
            .map(|(skill, _, _)| *skill)
    }

    pub fn name(&self) -> &'static str {
        SKILL_TABLE[self.index()].1
    }

    pub fn governing_ability(&self) -> Ability {
        SKILL_TABLE[self.index()].2
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
