use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const ABILITY_COUNT: usize = 6;

/// One of the six ability scores, in sheet display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ability {
    Force,
    Dexterite,
    Constitution,
    Intelligence,
    Sagesse,
    Charisme,
}

impl Ability {
    pub const ALL: [Ability; ABILITY_COUNT] = [
        Self::Force,
        Self::Dexterite,
        Self::Constitution,
        Self::Intelligence,
        Self::Sagesse,
        Self::Charisme,
    ];

    /// Looks an ability up by name, ignoring letter case.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|ability| ability.as_str() == upper)
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Canonical uppercase key used in character documents.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Force => "FORCE",
            Self::Dexterite => "DEXTERITE",
            Self::Constitution => "CONSTITUTION",
            Self::Intelligence => "INTELLIGENCE",
            Self::Sagesse => "SAGESSE",
            Self::Charisme => "CHARISME",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match *self {
            Self::Force => "FOR",
            Self::Dexterite => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Sagesse => "SAG",
            Self::Charisme => "CHA",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ability '{0}'")]
pub struct UnknownAbility(pub String);

impl FromStr for Ability {
    type Err = UnknownAbility;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownAbility(s.to_string()))
    }
}
