//! Normalized cache key construction
//!
//! Every store read is memoized under a key derived deterministically from
//! the operation name and its normalized arguments, so identical queries
//! always land on the same entry.

use crate::domain::pet_type::PetType;

pub fn all_pets() -> String {
    "pets:all".to_string()
}

pub fn all_abilities() -> String {
    "abilities:all".to_string()
}

pub fn pet(id: i64) -> String {
    format!("pet:{}", id)
}

pub fn ability(id: i64) -> String {
    format!("ability:{}", id)
}

pub fn pets_by_type(pet_type: PetType) -> String {
    format!("pets:type:{}", pet_type)
}

pub fn abilities_by_type(ability_type: PetType) -> String {
    format!("abilities:type:{}", ability_type)
}

/// Key for an ids lookup: ids sorted and comma-joined. Duplicate ids in the
/// input are preserved, not deduplicated.
pub fn abilities_by_ids(ids: &[i64]) -> String {
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();

    let joined = sorted
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");

    format!("abilities:ids:{}", joined)
}
