//! Domain layer: entities, traits and pure battle logic

pub mod ability;
pub mod battle_pet;
pub mod cache;
pub mod embedding;
pub mod error;
pub mod pet_type;
pub mod search;
pub mod store;
pub mod type_chart;

pub use error::DomainError;
