//! Ability entity and damage classification

mod damage;
mod entity;

pub use damage::is_damage_ability;
pub use entity::Ability;
