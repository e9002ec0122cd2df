//! Pet type enumeration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// The ten battle pet families. Fixed, process-wide constant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PetType {
    Aquatic,
    Beast,
    Critter,
    Dragonkin,
    Elemental,
    Flying,
    Humanoid,
    Magic,
    Mechanical,
    Undead,
}

impl PetType {
    /// All pet types, in canonical order
    pub const ALL: [PetType; 10] = [
        PetType::Aquatic,
        PetType::Beast,
        PetType::Critter,
        PetType::Dragonkin,
        PetType::Elemental,
        PetType::Flying,
        PetType::Humanoid,
        PetType::Magic,
        PetType::Mechanical,
        PetType::Undead,
    ];

    /// Canonical capitalized name, as it appears in the reference data
    pub fn as_str(&self) -> &'static str {
        match self {
            PetType::Aquatic => "Aquatic",
            PetType::Beast => "Beast",
            PetType::Critter => "Critter",
            PetType::Dragonkin => "Dragonkin",
            PetType::Elemental => "Elemental",
            PetType::Flying => "Flying",
            PetType::Humanoid => "Humanoid",
            PetType::Magic => "Magic",
            PetType::Mechanical => "Mechanical",
            PetType::Undead => "Undead",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PetType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        PetType::ALL
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| {
                DomainError::invalid_type(format!("'{}' is not a known pet type", name))
            })
    }
}
