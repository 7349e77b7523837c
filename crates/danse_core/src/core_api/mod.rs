mod engine;
mod error;
mod types;

pub use engine::{Engine, Session};
pub use error::{LoadFailure, LoadFailureCode};
pub use types::{
    AbilityEntry, ActionCategories, ArmorEntry, CombatStats, SaveEntry, SkillEntry, WeaponEntry,
};
