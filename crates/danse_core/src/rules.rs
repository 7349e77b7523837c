//! Fixed rules constants and the ability modifier.

pub const DEFAULT_ABILITY_SCORE: i32 = 10;
pub const DEFAULT_PROFICIENCY_BONUS: i32 = 2;
pub const DEFAULT_BASE_DIFFICULTY: i32 = 8;

pub const BASE_ARMOR_CLASS: i32 = 10;
pub const BASE_HIT_POINTS: i32 = 8;
pub const SPEED: &str = "9 m";
pub const HIT_DIE: &str = "1d8";

/// Active ability that swaps DEXTERITE for INTELLIGENCE in base armor class.
pub const PREDICTIVE_DEFENSE: &str = "Défense prédictive";

/// Marker looked for (case-insensitively) in an active ability summary.
pub const BONUS_ACTION_MARKER: &str = "action bonus";

/// `floor((score - 10) / 2)`, rounding toward negative infinity.
pub fn modifier(score: i32) -> i32 {
    // Widened so extreme scores cannot overflow; the halved result always fits.
    ((i64::from(score) - 10).div_euclid(2)) as i32
}

/// Formats a modifier with an explicit sign: `+3`, `+0`, `-1`.
pub fn signed(value: i32) -> String {
    format!("{value:+}")
}
