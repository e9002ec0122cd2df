//! Entity store trait and external row types

mod repository;
mod row;

pub use repository::PetStore;
pub use row::{AbilityRow, BulkLoadReport, PetRow};

#[cfg(test)]
pub use repository::mock::MockPetStore;
