//! Battle pet entity

mod entity;

pub use entity::{ABILITY_SLOTS, BattlePet, BattlePetFields, EMPTY_ABILITY_ID};
