//! Read-through caching decorator over a backing store

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::domain::ability::Ability;
use crate::domain::battle_pet::BattlePet;
use crate::domain::cache::{key, Cache, CacheExt};
use crate::domain::pet_type::PetType;
use crate::domain::store::PetStore;
use crate::domain::DomainError;

/// Caching layer in front of any [`PetStore`].
///
/// Every read checks the cache first; a miss falls through to the backing
/// store and the result is written back under the same key. Cache failures
/// degrade to direct store reads instead of failing the request. Writes go
/// straight to the backing store.
#[derive(Debug)]
pub struct CachedPetStore {
    store: Arc<dyn PetStore>,
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl CachedPetStore {
    pub fn new(store: Arc<dyn PetStore>, cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self { store, cache, ttl }
    }

    /// Read-through helper: cache lookup, then the store on a miss
    async fn read_through<T, F>(&self, cache_key: &str, load: F) -> Result<T, DomainError>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: std::future::Future<Output = Result<T, DomainError>> + Send,
    {
        match self.cache.get::<T>(cache_key).await {
            Ok(Some(value)) => {
                debug!(key = cache_key, "Cache hit");
                return Ok(value);
            }
            Ok(None) => {
                debug!(key = cache_key, "Cache miss");
            }
            Err(e) => {
                warn!(key = cache_key, "Cache read failed, falling back to store: {}", e);
            }
        }

        let value = load.await?;

        if let Err(e) = self.cache.set(cache_key, &value, self.ttl).await {
            warn!(key = cache_key, "Failed to populate cache: {}", e);
        }

        Ok(value)
    }
}

#[async_trait]
impl PetStore for CachedPetStore {
    async fn get_pet(&self, id: i64) -> Result<BattlePet, DomainError> {
        self.read_through(&key::pet(id), self.store.get_pet(id))
            .await
    }

    async fn get_ability(&self, id: i64) -> Result<Ability, DomainError> {
        self.read_through(&key::ability(id), self.store.get_ability(id))
            .await
    }

    async fn get_abilities_by_ids(&self, ids: &[i64]) -> Result<Vec<Ability>, DomainError> {
        self.read_through(
            &key::abilities_by_ids(ids),
            self.store.get_abilities_by_ids(ids),
        )
        .await
    }

    async fn list_pets(&self) -> Result<Vec<BattlePet>, DomainError> {
        self.read_through(&key::all_pets(), self.store.list_pets())
            .await
    }

    async fn list_abilities(&self) -> Result<Vec<Ability>, DomainError> {
        self.read_through(&key::all_abilities(), self.store.list_abilities())
            .await
    }

    async fn list_pets_by_type(&self, pet_type: PetType) -> Result<Vec<BattlePet>, DomainError> {
        self.read_through(
            &key::pets_by_type(pet_type),
            self.store.list_pets_by_type(pet_type),
        )
        .await
    }

    async fn list_abilities_by_type(
        &self,
        ability_type: PetType,
    ) -> Result<Vec<Ability>, DomainError> {
        self.read_through(
            &key::abilities_by_type(ability_type),
            self.store.list_abilities_by_type(ability_type),
        )
        .await
    }

    async fn insert_pet(&self, pet: BattlePet) -> Result<(), DomainError> {
        self.store.insert_pet(pet).await
    }

    async fn insert_ability(&self, ability: Ability) -> Result<(), DomainError> {
        self.store.insert_ability(ability).await
    }
}
