//! Ability entity

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::pet_type::PetType;

/// A battle pet ability.
///
/// Damage, healing, duration, cooldown and accuracy are free-text magnitude
/// strings carried over from the reference data; only `id` and `pet_type`
/// are structured. Identity is the id alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ability {
    pub id: i64,
    pub name: String,
    pub damage: String,
    pub healing: String,
    pub duration: String,
    pub cooldown: String,
    pub accuracy: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub popularity: i64,
    pub description: String,
}

impl PartialEq for Ability {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ability {}

impl Hash for Ability {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Ability {
    /// Canonical textual summary, used as embedding input
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}). Type: {}. Damage: {}. Healing: {}. Duration: {}. \
             Cooldown: {}. Accuracy: {}. Popularity: {}. Description: {}",
            self.name,
            self.id,
            self.pet_type,
            self.damage,
            self.healing,
            self.duration,
            self.cooldown,
            self.accuracy,
            self.popularity,
            self.description,
        )
    }
}
