use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::ability::{ABILITY_COUNT, Ability};
use crate::normalize::normalize_ability_scores;
use crate::rules::{
    BASE_ARMOR_CLASS, BASE_HIT_POINTS, BONUS_ACTION_MARKER, DEFAULT_ABILITY_SCORE,
    DEFAULT_BASE_DIFFICULTY, DEFAULT_PROFICIENCY_BONUS, HIT_DIE, PREDICTIVE_DEFENSE, SPEED,
    modifier,
};
use crate::sheet::{ActiveAbility, CharacterSheet};
use crate::skill::Skill;

use super::error::LoadFailure;
use super::types::{
    AbilityEntry, ActionCategories, ArmorEntry, CombatStats, SaveEntry, SkillEntry, WeaponEntry,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

/// A loaded character with every default resolved.
///
/// All queries are pure reads; calling any of them twice yields the same
/// result.
#[derive(Debug, Clone)]
pub struct Session {
    sheet: CharacterSheet,
    scores: [i32; ABILITY_COUNT],
    mastery_bonus: i32,
    mastered_skills: BTreeSet<Skill>,
    mastered_saves: BTreeSet<Ability>,
}

impl Engine {
    pub fn new() -> Self {
        Self
    }

    pub fn open_path<P: AsRef<Path>>(&self, path: P) -> Result<Session, LoadFailure> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LoadFailure::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), len = bytes.len(), "read character document");
        self.open_bytes(bytes)
    }

    pub fn open_bytes<B: AsRef<[u8]>>(&self, bytes: B) -> Result<Session, LoadFailure> {
        let sheet: CharacterSheet = serde_json::from_slice(bytes.as_ref())?;
        Ok(self.open_sheet(sheet))
    }

    pub fn open_str(&self, json: &str) -> Result<Session, LoadFailure> {
        let sheet: CharacterSheet = serde_json::from_str(json)?;
        Ok(self.open_sheet(sheet))
    }

    /// Normalizes the sheet and resolves its defaults. Never fails.
    pub fn open_sheet(&self, mut sheet: CharacterSheet) -> Session {
        normalize_ability_scores(&mut sheet);
        let session = Session::resolve(sheet);
        info!(
            name = session.display_name(),
            active = session.sheet.active_abilities.len(),
            weapons = session.sheet.equipment.weapons.len(),
            "loaded character"
        );
        session
    }
}

impl Session {
    fn resolve(sheet: CharacterSheet) -> Self {
        let mut scores = [DEFAULT_ABILITY_SCORE; ABILITY_COUNT];
        for ability in Ability::ALL {
            if let Some(&score) = sheet.ability_scores.get(ability.as_str()) {
                scores[ability.index()] = score;
            }
        }
        for key in sheet.ability_scores.keys() {
            if !Ability::ALL.iter().any(|ability| ability.as_str() == key.as_str()) {
                debug!(key = %key, "ignoring unknown ability score key");
            }
        }

        let mastered_skills = sheet
            .mastered_skills
            .iter()
            .filter_map(|name| {
                let skill = Skill::from_name(name);
                if skill.is_none() {
                    debug!(skill = %name, "ignoring unknown mastered skill");
                }
                skill
            })
            .collect();

        let mastered_saves = sheet
            .mastered_saves
            .iter()
            .filter_map(|name| {
                let ability = Ability::from_name(name);
                if ability.is_none() {
                    debug!(save = %name, "ignoring unknown mastered save");
                }
                ability
            })
            .collect();

        Self {
            mastery_bonus: sheet.proficiency_bonus.unwrap_or(DEFAULT_PROFICIENCY_BONUS),
            scores,
            mastered_skills,
            mastered_saves,
            sheet,
        }
    }

    /// The normalized document backing this session.
    pub fn sheet(&self) -> &CharacterSheet {
        &self.sheet
    }

    pub fn display_name(&self) -> &str {
        self.sheet.name.as_deref().unwrap_or("Personnage")
    }

    pub fn score(&self, ability: Ability) -> i32 {
        self.scores[ability.index()]
    }

    pub fn ability_modifier(&self, ability: Ability) -> i32 {
        modifier(self.score(ability))
    }

    /// Score for an ability named in the document; unknown names read as the
    /// default score.
    pub fn score_by_name(&self, name: &str) -> i32 {
        Ability::from_name(name)
            .map(|ability| self.score(ability))
            .unwrap_or(DEFAULT_ABILITY_SCORE)
    }

    pub fn mastery_bonus(&self) -> i32 {
        self.mastery_bonus
    }

    pub fn uses_predictive_defense(&self) -> bool {
        self.sheet
            .active_abilities
            .iter()
            .any(|active| active.name == PREDICTIVE_DEFENSE)
    }

    pub fn armor_class(&self) -> i32 {
        let governing = if self.uses_predictive_defense() {
            Ability::Intelligence
        } else {
            Ability::Dexterite
        };
        BASE_ARMOR_CLASS.saturating_add(self.ability_modifier(governing))
    }

    pub fn hit_points(&self) -> i32 {
        BASE_HIT_POINTS.saturating_add(self.ability_modifier(Ability::Constitution))
    }

    pub fn initiative(&self) -> i32 {
        self.ability_modifier(Ability::Dexterite)
    }

    pub fn combat(&self) -> CombatStats {
        CombatStats {
            armor_class: self.armor_class(),
            uses_predictive_defense: self.uses_predictive_defense(),
            hit_points: self.hit_points(),
            initiative: self.initiative(),
            speed: SPEED.to_string(),
            hit_die: HIT_DIE.to_string(),
            mastery_bonus: self.mastery_bonus,
        }
    }

    pub fn abilities(&self) -> Vec<AbilityEntry> {
        Ability::ALL
            .into_iter()
            .map(|ability| AbilityEntry {
                ability,
                score: self.score(ability),
                modifier: self.ability_modifier(ability),
            })
            .collect()
    }

    pub fn is_skill_mastered(&self, skill: Skill) -> bool {
        self.mastered_skills.contains(&skill)
    }

    pub fn skill_modifier(&self, skill: Skill) -> i32 {
        let bonus = if self.is_skill_mastered(skill) {
            self.mastery_bonus
        } else {
            0
        };
        self.ability_modifier(skill.governing_ability())
            .saturating_add(bonus)
    }

    pub fn skill(&self, skill: Skill) -> SkillEntry {
        SkillEntry {
            skill,
            ability: skill.governing_ability(),
            modifier: self.skill_modifier(skill),
            mastered: self.is_skill_mastered(skill),
        }
    }

    pub fn skills(&self) -> Vec<SkillEntry> {
        Skill::all().map(|skill| self.skill(skill)).collect()
    }

    pub fn is_save_mastered(&self, ability: Ability) -> bool {
        self.mastered_saves.contains(&ability)
    }

    pub fn save_modifier(&self, ability: Ability) -> i32 {
        let bonus = if self.is_save_mastered(ability) {
            self.mastery_bonus
        } else {
            0
        };
        self.ability_modifier(ability).saturating_add(bonus)
    }

    pub fn saves(&self) -> Vec<SaveEntry> {
        Ability::ALL
            .into_iter()
            .map(|ability| SaveEntry {
                ability,
                modifier: self.save_modifier(ability),
                mastered: self.is_save_mastered(ability),
            })
            .collect()
    }

    /// Difficulty of the character's powers, when the document defines a
    /// saving-throw rule.
    pub fn power_difficulty(&self) -> Option<i32> {
        let rule = self.sheet.saving_throw_rule.as_ref()?;
        let base = rule.base_difficulty.unwrap_or(DEFAULT_BASE_DIFFICULTY);
        let bonus = if rule.add_proficiency_bonus {
            self.mastery_bonus
        } else {
            0
        };
        Some(
            base.saturating_add(modifier(self.score_by_name(&rule.governing_ability)))
                .saturating_add(bonus),
        )
    }

    /// `None` means no armor is equipped, which is not the same as a zero bonus.
    pub fn armor(&self) -> Option<ArmorEntry> {
        let armor = self.sheet.equipment.armor.as_ref()?;
        let modifier = modifier(self.score_by_name(&armor.governing_ability));
        Some(ArmorEntry {
            name: armor.name.clone(),
            kind: armor.kind.clone(),
            ac_bonus: armor.ac_bonus,
            governing_ability: armor.governing_ability.clone(),
            modifier,
            effective_ac: armor.ac_bonus.saturating_add(modifier),
        })
    }

    pub fn weapons(&self) -> Vec<WeaponEntry> {
        self.sheet
            .equipment
            .weapons
            .iter()
            .map(|weapon| WeaponEntry {
                name: weapon.name.clone(),
                kind: weapon.kind.clone(),
                damage: weapon.damage.clone(),
                governing_ability: weapon.governing_ability.clone(),
                attack_modifier: modifier(self.score_by_name(&weapon.governing_ability)),
                range: weapon.range.clone(),
            })
            .collect()
    }

    pub fn actions(&self) -> ActionCategories {
        let (bonus_actions, other) = self
            .sheet
            .active_abilities
            .iter()
            .cloned()
            .partition(is_bonus_action);
        ActionCategories {
            bonus_actions,
            other,
        }
    }
}

fn is_bonus_action(active: &ActiveAbility) -> bool {
    active
        .summary
        .as_deref()
        .is_some_and(|summary| summary.to_lowercase().contains(BONUS_ACTION_MARKER))
}
