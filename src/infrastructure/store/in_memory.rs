//! In-memory entity store for development and testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ability::Ability;
use crate::domain::battle_pet::BattlePet;
use crate::domain::pet_type::PetType;
use crate::domain::store::PetStore;
use crate::domain::DomainError;

/// In-memory entity store backed by id-keyed maps
#[derive(Debug, Default)]
pub struct InMemoryPetStore {
    pets: Arc<RwLock<HashMap<i64, BattlePet>>>,
    abilities: Arc<RwLock<HashMap<i64, Ability>>>,
}

impl InMemoryPetStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PetStore for InMemoryPetStore {
    async fn get_pet(&self, id: i64) -> Result<BattlePet, DomainError> {
        let pets = self.pets.read().await;

        pets.get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("Battle pet with id {} not found", id)))
    }

    async fn get_ability(&self, id: i64) -> Result<Ability, DomainError> {
        let abilities = self.abilities.read().await;

        abilities
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("Ability with id {} not found", id)))
    }

    async fn get_abilities_by_ids(&self, ids: &[i64]) -> Result<Vec<Ability>, DomainError> {
        let abilities = self.abilities.read().await;

        Ok(ids
            .iter()
            .filter_map(|id| abilities.get(id).cloned())
            .collect())
    }

    async fn list_pets(&self) -> Result<Vec<BattlePet>, DomainError> {
        let pets = self.pets.read().await;
        Ok(pets.values().cloned().collect())
    }

    async fn list_abilities(&self) -> Result<Vec<Ability>, DomainError> {
        let abilities = self.abilities.read().await;
        Ok(abilities.values().cloned().collect())
    }

    async fn list_pets_by_type(&self, pet_type: PetType) -> Result<Vec<BattlePet>, DomainError> {
        let pets = self.pets.read().await;

        Ok(pets
            .values()
            .filter(|p| p.pet_type == pet_type)
            .cloned()
            .collect())
    }

    async fn list_abilities_by_type(
        &self,
        ability_type: PetType,
    ) -> Result<Vec<Ability>, DomainError> {
        let abilities = self.abilities.read().await;

        Ok(abilities
            .values()
            .filter(|a| a.pet_type == ability_type)
            .cloned()
            .collect())
    }

    async fn insert_pet(&self, pet: BattlePet) -> Result<(), DomainError> {
        let mut pets = self.pets.write().await;

        if pets.contains_key(&pet.id) {
            return Err(DomainError::validation(format!(
                "Battle pet with id {} already exists",
                pet.id
            )));
        }

        pets.insert(pet.id, pet);
        Ok(())
    }

    async fn insert_ability(&self, ability: Ability) -> Result<(), DomainError> {
        let mut abilities = self.abilities.write().await;

        if abilities.contains_key(&ability.id) {
            return Err(DomainError::validation(format!(
                "Ability with id {} already exists",
                ability.id
            )));
        }

        abilities.insert(ability.id, ability);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ability::Ability;
    use crate::domain::battle_pet::{BattlePet, BattlePetFields};
    use crate::domain::store::{AbilityRow, PetRow};

    fn pet(id: i64, pet_type: PetType) -> BattlePet {
        BattlePet::new(BattlePetFields {
            id,
            name: format!("Pet {}", id),
            level: 25,
            health: 1400,
            power: 300,
            speed: 280,
            breed: "P/P".to_string(),
            abilities: vec![id * 10, id * 10 + 1],
            source: "Pet Battle".to_string(),
            pet_type,
            popularity: 50,
            is_untameable: false,
        })
    }

    fn ability(id: i64, pet_type: PetType) -> Ability {
        Ability {
            id,
            name: format!("Ability {}", id),
            damage: "20".to_string(),
            healing: "0".to_string(),
            duration: "1".to_string(),
            cooldown: "0".to_string(),
            accuracy: "100".to_string(),
            pet_type,
            popularity: 10,
            description: format!("Deals 20 {} damage.", pet_type),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_pet() {
        let store = InMemoryPetStore::new();

        store.insert_pet(pet(1, PetType::Beast)).await.unwrap();

        let found = store.get_pet(1).await.unwrap();
        assert_eq!(found.name, "Pet 1");
    }

    #[tokio::test]
    async fn test_get_missing_pet() {
        let store = InMemoryPetStore::new();

        let result = store.get_pet(99).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_duplicate_pet_id_rejected() {
        let store = InMemoryPetStore::new();

        store.insert_pet(pet(1, PetType::Beast)).await.unwrap();

        let result = store.insert_pet(pet(1, PetType::Undead)).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_list_pets_by_type() {
        let store = InMemoryPetStore::new();

        store.insert_pet(pet(1, PetType::Beast)).await.unwrap();
        store.insert_pet(pet(2, PetType::Undead)).await.unwrap();
        store.insert_pet(pet(3, PetType::Beast)).await.unwrap();

        let beasts = store.list_pets_by_type(PetType::Beast).await.unwrap();
        assert_eq!(beasts.len(), 2);

        let dragons = store.list_pets_by_type(PetType::Dragonkin).await.unwrap();
        assert!(dragons.is_empty());
    }

    #[tokio::test]
    async fn test_get_abilities_by_ids_skips_missing() {
        let store = InMemoryPetStore::new();

        store
            .insert_ability(ability(10, PetType::Magic))
            .await
            .unwrap();
        store
            .insert_ability(ability(20, PetType::Magic))
            .await
            .unwrap();

        let found = store.get_abilities_by_ids(&[10, 20, 30]).await.unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_bulk_load_skips_bad_rows() {
        let store = InMemoryPetStore::new();

        let rows = vec![
            PetRow {
                id: "1".to_string(),
                name: "Anubisath Idol".to_string(),
                level: "25".to_string(),
                health: "1725".to_string(),
                power: "276".to_string(),
                speed: "213".to_string(),
                breed: "P/P".to_string(),
                abilities: "[593, 518, 519]".to_string(),
                source: "Raid".to_string(),
                pet_type: "Humanoid".to_string(),
                popularity: "99".to_string(),
                untameable: "False".to_string(),
            },
            PetRow {
                id: "not-a-number".to_string(),
                name: "Broken Row".to_string(),
                level: "25".to_string(),
                health: "1400".to_string(),
                power: "300".to_string(),
                speed: "280".to_string(),
                breed: "H/H".to_string(),
                abilities: "[1, 2]".to_string(),
                source: "Drop".to_string(),
                pet_type: "Beast".to_string(),
                popularity: "5".to_string(),
                untameable: "False".to_string(),
            },
        ];

        let report = store.bulk_load_pets(rows).await.unwrap();
        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped, 1);

        let pets = store.list_pets().await.unwrap();
        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0].name, "Anubisath Idol");
    }

    #[tokio::test]
    async fn test_bulk_load_abilities() {
        let store = InMemoryPetStore::new();

        let rows = vec![AbilityRow {
            id: "110".to_string(),
            name: "Crush".to_string(),
            damage: "25".to_string(),
            healing: "0".to_string(),
            duration: "1".to_string(),
            cooldown: "0".to_string(),
            accuracy: "95".to_string(),
            pet_type: "Humanoid".to_string(),
            popularity: "40".to_string(),
            description: "Crushes the enemy, dealing 25 Humanoid damage.".to_string(),
        }];

        let report = store.bulk_load_abilities(rows).await.unwrap();
        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped, 0);

        let found = store.get_ability(110).await.unwrap();
        assert_eq!(found.name, "Crush");
    }
}
