use crate::ability::Ability;
use crate::rules::signed;
use crate::sheet::ActiveAbility;
use crate::skill::Skill;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatStats {
    pub armor_class: i32,
    /// Base armor class is governed by INTELLIGENCE instead of DEXTERITE.
    pub uses_predictive_defense: bool,
    pub hit_points: i32,
    pub initiative: i32,
    pub speed: String,
    pub hit_die: String,
    pub mastery_bonus: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityEntry {
    pub ability: Ability,
    pub score: i32,
    pub modifier: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub skill: Skill,
    pub ability: Ability,
    pub modifier: i32,
    pub mastered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveEntry {
    pub ability: Ability,
    pub modifier: i32,
    pub mastered: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmorEntry {
    pub name: String,
    pub kind: String,
    pub ac_bonus: i32,
    /// Governing ability as written in the document.
    pub governing_ability: String,
    pub modifier: i32,
    pub effective_ac: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponEntry {
    pub name: String,
    pub kind: String,
    pub damage: String,
    pub governing_ability: String,
    pub attack_modifier: i32,
    pub range: String,
}

impl WeaponEntry {
    /// Damage expression followed by the signed modifier, e.g. `1d8 +3`.
    pub fn damage_display(&self) -> String {
        format!("{} {}", self.damage, signed(self.attack_modifier))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionCategories {
    pub bonus_actions: Vec<ActiveAbility>,
    pub other: Vec<ActiveAbility>,
}
