mod html;
mod json;
mod text;

pub use html::{HtmlRenderOptions, escape_html, render_html, render_html_with_options};
pub use json::{render_json_full, render_json_selected, render_json_string};
pub use text::render_text;

/// Actions every character can take, listed after the derived ones.
pub const OTHER_ACTIONS: [&str; 8] = [
    "Attaquer",
    "Esquiver",
    "Se désengager",
    "Se cacher",
    "Aider",
    "Se relever",
    "S'équiper/déséquiper",
    "Lire/boire un objet",
];

pub const OTHER_BONUS_ACTIONS: [&str; 3] = [
    "Dégainer",
    "Interagir avec un objet",
    "Activer un pouvoir passif",
];

const NO_ARMOR: &str = "Aucune armure équipée.";
const NO_WEAPON: &str = "Aucune arme équipée.";
const NO_BONUS_ACTION: &str = "Aucune action bonus connue.";
const NO_CAPACITY: &str = "Aucune capacité.";
const NO_TRAIT: &str = "Aucun trait.";
const MASTERED_MARK: &str = "✓";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    CanonicalV1,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub name: bool,
    pub armor_class: bool,
    pub hit_points: bool,
    pub initiative: bool,
    pub speed: bool,
    pub hit_die: bool,
    pub mastery: bool,
    pub abilities: bool,
    pub saves: bool,
    pub power_difficulty: bool,
    pub skills: bool,
    pub capacities: bool,
    pub traits: bool,
    pub defenses: bool,
    pub progression: bool,
    pub armor: bool,
    pub weapons: bool,
    pub actions: bool,
}

impl FieldSelection {
    pub fn is_any_selected(&self) -> bool {
        self.name
            || self.armor_class
            || self.hit_points
            || self.initiative
            || self.speed
            || self.hit_die
            || self.mastery
            || self.abilities
            || self.saves
            || self.power_difficulty
            || self.skills
            || self.capacities
            || self.traits
            || self.defenses
            || self.progression
            || self.armor
            || self.weapons
            || self.actions
    }

    pub fn all() -> Self {
        Self {
            name: true,
            armor_class: true,
            hit_points: true,
            initiative: true,
            speed: true,
            hit_die: true,
            mastery: true,
            abilities: true,
            saves: true,
            power_difficulty: true,
            skills: true,
            capacities: true,
            traits: true,
            defenses: true,
            progression: true,
            armor: true,
            weapons: true,
            actions: true,
        }
    }
}
