//! Battle pet entity

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::pet_type::PetType;

/// Reserved ability id denoting an unfilled ability slot.
pub const EMPTY_ABILITY_ID: i64 = -1;

/// Number of ability slots every pet carries.
pub const ABILITY_SLOTS: usize = 6;

/// A battle pet with its six ability references.
///
/// Identity is the id alone. The ability list is normalized to exactly six
/// entries once, at construction; it is not re-validated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattlePet {
    pub id: i64,
    pub name: String,
    pub level: i64,
    pub health: i64,
    pub power: i64,
    pub speed: i64,
    pub breed: String,
    pub abilities: Vec<i64>,
    pub source: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub popularity: i64,
    pub is_untameable: bool,
}

/// Fields needed to construct a [`BattlePet`]
#[derive(Debug, Clone)]
pub struct BattlePetFields {
    pub id: i64,
    pub name: String,
    pub level: i64,
    pub health: i64,
    pub power: i64,
    pub speed: i64,
    pub breed: String,
    pub abilities: Vec<i64>,
    pub source: String,
    pub pet_type: PetType,
    pub popularity: i64,
    pub is_untameable: bool,
}

impl BattlePet {
    /// Build a pet, padding the ability list with [`EMPTY_ABILITY_ID`] up to
    /// six slots or truncating it down to the first six.
    pub fn new(fields: BattlePetFields) -> Self {
        let mut abilities = fields.abilities;

        if abilities.len() < ABILITY_SLOTS {
            abilities.resize(ABILITY_SLOTS, EMPTY_ABILITY_ID);
        } else {
            abilities.truncate(ABILITY_SLOTS);
        }

        Self {
            id: fields.id,
            name: fields.name,
            level: fields.level,
            health: fields.health,
            power: fields.power,
            speed: fields.speed,
            breed: fields.breed,
            abilities,
            source: fields.source,
            pet_type: fields.pet_type,
            popularity: fields.popularity,
            is_untameable: fields.is_untameable,
        }
    }

    /// Ability references excluding empty slots
    pub fn filled_ability_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.abilities
            .iter()
            .copied()
            .filter(|id| *id != EMPTY_ABILITY_ID)
    }
}

impl PartialEq for BattlePet {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BattlePet {}

impl Hash for BattlePet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for BattlePet {
    /// Canonical textual summary, used as embedding input
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ID: {}). Level: {}. Health: {}. Power: {}. Speed: {}. \
             Breed: {}. Source: {}. Type: {}. Popularity: {}. Untameable: {}",
            self.name,
            self.id,
            self.level,
            self.health,
            self.power,
            self.speed,
            self.breed,
            self.source,
            self.pet_type,
            self.popularity,
            if self.is_untameable { "Yes" } else { "No" },
        )
    }
}
