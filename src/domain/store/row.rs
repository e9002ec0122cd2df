//! External tabular rows and their conversion into entities

use serde::{Deserialize, Serialize};

use crate::domain::ability::Ability;
use crate::domain::battle_pet::{BattlePet, BattlePetFields};
use crate::domain::pet_type::PetType;
use crate::domain::DomainError;

/// One row of the external battle pet table, all columns as raw text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Level")]
    pub level: String,
    #[serde(rename = "Health")]
    pub health: String,
    #[serde(rename = "Power")]
    pub power: String,
    #[serde(rename = "Speed")]
    pub speed: String,
    #[serde(rename = "Breed")]
    pub breed: String,
    #[serde(rename = "Abilities")]
    pub abilities: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Type")]
    pub pet_type: String,
    #[serde(rename = "Popularity")]
    pub popularity: String,
    #[serde(rename = "Untameable")]
    pub untameable: String,
}

/// One row of the external ability table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Damage")]
    pub damage: String,
    #[serde(rename = "Healing")]
    pub healing: String,
    #[serde(rename = "Duration")]
    pub duration: String,
    #[serde(rename = "Cooldown")]
    pub cooldown: String,
    #[serde(rename = "Accuracy")]
    pub accuracy: String,
    #[serde(rename = "Type")]
    pub pet_type: String,
    #[serde(rename = "Popularity")]
    pub popularity: String,
    #[serde(rename = "Description")]
    pub description: String,
}

/// Outcome of a bulk load: rows either land or are skipped, never abort the batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkLoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

fn parse_int(field: &str, value: &str) -> Result<i64, DomainError> {
    value.trim().parse::<i64>().map_err(|_| {
        DomainError::validation(format!("{} must be an integer, got '{}'", field, value))
    })
}

/// Parse a literal list-of-ints encoding such as "[101, 102, 103]"
fn parse_ability_list(value: &str) -> Result<Vec<i64>, DomainError> {
    let inner = value
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| {
            DomainError::validation(format!("Abilities must be a bracketed list, got '{}'", value))
        })?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|part| parse_int("Abilities entry", part))
        .collect()
}

impl TryFrom<PetRow> for BattlePet {
    type Error = DomainError;

    fn try_from(row: PetRow) -> Result<Self, Self::Error> {
        // The original loader sorts the ability references before
        // normalization; padding still goes at the end.
        let mut abilities = parse_ability_list(&row.abilities)?;
        abilities.sort_unstable();

        Ok(BattlePet::new(BattlePetFields {
            id: parse_int("ID", &row.id)?,
            name: row.name,
            level: parse_int("Level", &row.level)?,
            health: parse_int("Health", &row.health)?,
            power: parse_int("Power", &row.power)?,
            speed: parse_int("Speed", &row.speed)?,
            breed: row.breed,
            abilities,
            source: row.source,
            pet_type: row.pet_type.parse::<PetType>()?,
            popularity: parse_int("Popularity", &row.popularity)?,
            is_untameable: row.untameable.trim().eq_ignore_ascii_case("true"),
        }))
    }
}

impl TryFrom<AbilityRow> for Ability {
    type Error = DomainError;

    fn try_from(row: AbilityRow) -> Result<Self, Self::Error> {
        Ok(Ability {
            id: parse_int("ID", &row.id)?,
            name: row.name,
            damage: row.damage,
            healing: row.healing,
            duration: row.duration,
            cooldown: row.cooldown,
            accuracy: row.accuracy,
            pet_type: row.pet_type.parse::<PetType>()?,
            popularity: parse_int("Popularity", &row.popularity)?,
            description: row.description,
        })
    }
}
