//! Entity store trait

use async_trait::async_trait;
use tracing::warn;

use super::{AbilityRow, BulkLoadReport, PetRow};
use crate::domain::ability::Ability;
use crate::domain::battle_pet::BattlePet;
use crate::domain::pet_type::PetType;
use crate::domain::DomainError;

/// Persistence boundary over the two entity collections.
///
/// Any concrete store (document database, embedded key-value file, in-memory
/// map) implements this uniformly. Single-document operations are atomic;
/// there is no cross-call transaction.
#[async_trait]
pub trait PetStore: Send + Sync + std::fmt::Debug {
    /// Get a battle pet by id
    async fn get_pet(&self, id: i64) -> Result<BattlePet, DomainError>;

    /// Get an ability by id
    async fn get_ability(&self, id: i64) -> Result<Ability, DomainError>;

    /// Get the abilities whose ids appear in `ids`.
    ///
    /// Missing ids are not an error; the result order is unspecified.
    async fn get_abilities_by_ids(&self, ids: &[i64]) -> Result<Vec<Ability>, DomainError>;

    /// List every battle pet
    async fn list_pets(&self) -> Result<Vec<BattlePet>, DomainError>;

    /// List every ability
    async fn list_abilities(&self) -> Result<Vec<Ability>, DomainError>;

    /// List the battle pets of a specific type
    async fn list_pets_by_type(&self, pet_type: PetType) -> Result<Vec<BattlePet>, DomainError>;

    /// List the abilities of a specific type
    async fn list_abilities_by_type(
        &self,
        ability_type: PetType,
    ) -> Result<Vec<Ability>, DomainError>;

    /// Insert a battle pet; ids are unique within the collection
    async fn insert_pet(&self, pet: BattlePet) -> Result<(), DomainError>;

    /// Insert an ability; ids are unique within the collection
    async fn insert_ability(&self, ability: Ability) -> Result<(), DomainError>;

    /// Load external pet rows. Each row is validated independently; a row
    /// that fails is skipped and logged, and the batch continues.
    async fn bulk_load_pets(&self, rows: Vec<PetRow>) -> Result<BulkLoadReport, DomainError> {
        let mut report = BulkLoadReport::default();

        for row in rows {
            let name = row.name.clone();

            let pet = match BattlePet::try_from(row) {
                Ok(pet) => pet,
                Err(e) => {
                    warn!("Skipping pet row '{}': {}", name, e);
                    report.skipped += 1;
                    continue;
                }
            };

            match self.insert_pet(pet).await {
                Ok(()) => report.loaded += 1,
                Err(e) => {
                    warn!("Skipping pet row '{}': {}", name, e);
                    report.skipped += 1;
                }
            }
        }

        Ok(report)
    }

    /// Load external ability rows with the same per-row skip semantics
    async fn bulk_load_abilities(
        &self,
        rows: Vec<AbilityRow>,
    ) -> Result<BulkLoadReport, DomainError> {
        let mut report = BulkLoadReport::default();

        for row in rows {
            let name = row.name.clone();

            let ability = match Ability::try_from(row) {
                Ok(ability) => ability,
                Err(e) => {
                    warn!("Skipping ability row '{}': {}", name, e);
                    report.skipped += 1;
                    continue;
                }
            };

            match self.insert_ability(ability).await {
                Ok(()) => report.loaded += 1,
                Err(e) => {
                    warn!("Skipping ability row '{}': {}", name, e);
                    report.skipped += 1;
                }
            }
        }

        Ok(report)
    }
}
