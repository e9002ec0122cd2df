//! In-memory vector similarity index over pets and abilities

use std::cmp::Ordering;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::ability::Ability;
use crate::domain::battle_pet::BattlePet;
use crate::domain::embedding::{inner_product, l2_normalize, EmbeddingProvider};
use crate::domain::search::Scored;
use crate::domain::store::PetStore;
use crate::domain::DomainError;

/// Immutable flat index snapshot: one normalized vector per entity id.
///
/// Vectors are unit length, so inner product equals cosine similarity.
#[derive(Debug)]
struct FlatIndex {
    ids: Vec<i64>,
    vectors: Vec<Vec<f32>>,
}

impl FlatIndex {
    /// Top-k ids by similarity to an already-normalized query vector.
    ///
    /// The sort is stable, so equal scores keep index order and results are
    /// deterministic across runs.
    fn top_k(&self, query: &[f32], k: usize) -> Vec<(i64, f32)> {
        let mut scored: Vec<(i64, f32)> = self
            .ids
            .iter()
            .zip(self.vectors.iter())
            .map(|(id, vector)| (*id, inner_product(query, vector)))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(k);
        scored
    }
}

/// Vector index over both entity collections.
///
/// Each collection holds an atomically swappable snapshot; searches read the
/// snapshot current at call time and are never blocked by a rebuild.
#[derive(Debug)]
pub struct VectorSearchIndex {
    store: Arc<dyn PetStore>,
    provider: Arc<dyn EmbeddingProvider>,
    pets: RwLock<Option<Arc<FlatIndex>>>,
    abilities: RwLock<Option<Arc<FlatIndex>>>,
}

impl VectorSearchIndex {
    pub fn new(store: Arc<dyn PetStore>, provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            store,
            provider,
            pets: RwLock::new(None),
            abilities: RwLock::new(None),
        }
    }

    /// Build or rebuild both collection indexes
    pub async fn build(&self) -> Result<(), DomainError> {
        self.build_pets().await?;
        self.build_abilities().await?;
        Ok(())
    }

    /// Build or rebuild the pet index from the store's current contents
    pub async fn build_pets(&self) -> Result<(), DomainError> {
        let pets = self.store.list_pets().await?;

        let mut entries: Vec<(i64, String)> = pets
            .into_iter()
            .map(|pet| (pet.id, pet.to_string()))
            .collect();
        entries.sort_by_key(|(id, _)| *id);

        let index = self.embed_entries(entries).await?;
        info!(entities = index.ids.len(), "Built pet vector index");

        *self.pets.write().await = Some(Arc::new(index));
        Ok(())
    }

    /// Build or rebuild the ability index from the store's current contents
    pub async fn build_abilities(&self) -> Result<(), DomainError> {
        let abilities = self.store.list_abilities().await?;

        let mut entries: Vec<(i64, String)> = abilities
            .into_iter()
            .map(|ability| (ability.id, ability.to_string()))
            .collect();
        entries.sort_by_key(|(id, _)| *id);

        let index = self.embed_entries(entries).await?;
        info!(entities = index.ids.len(), "Built ability vector index");

        *self.abilities.write().await = Some(Arc::new(index));
        Ok(())
    }

    /// Find the pets most similar to a free-text query
    pub async fn search_pets(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<Scored<BattlePet>>, DomainError> {
        let index = self
            .pets
            .read()
            .await
            .clone()
            .ok_or_else(|| DomainError::index_not_built("pet index"))?;

        let hits = self.query_index(&index, query, k).await?;
        debug!(query, hits = hits.len(), "Pet similarity search");

        let mut results = Vec::with_capacity(hits.len());

        for (id, score) in hits {
            match self.store.get_pet(id).await {
                Ok(pet) => results.push(Scored::new(pet, score)),
                Err(DomainError::NotFound { .. }) => {
                    warn!(id, "Indexed pet no longer in store, dropping hit");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(results)
    }

    /// Find the abilities most similar to a free-text query
    pub async fn search_abilities(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<Scored<Ability>>, DomainError> {
        let index = self
            .abilities
            .read()
            .await
            .clone()
            .ok_or_else(|| DomainError::index_not_built("ability index"))?;

        let hits = self.query_index(&index, query, k).await?;
        debug!(query, hits = hits.len(), "Ability similarity search");

        let mut results = Vec::with_capacity(hits.len());

        for (id, score) in hits {
            match self.store.get_ability(id).await {
                Ok(ability) => results.push(Scored::new(ability, score)),
                Err(DomainError::NotFound { .. }) => {
                    warn!(id, "Indexed ability no longer in store, dropping hit");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(results)
    }

    async fn embed_entries(&self, entries: Vec<(i64, String)>) -> Result<FlatIndex, DomainError> {
        let mut ids = Vec::with_capacity(entries.len());
        let mut vectors = Vec::with_capacity(entries.len());

        for (id, text) in entries {
            let mut vector = self.provider.embed(&text).await?;
            l2_normalize(&mut vector);

            ids.push(id);
            vectors.push(vector);
        }

        Ok(FlatIndex { ids, vectors })
    }

    async fn query_index(
        &self,
        index: &FlatIndex,
        query: &str,
        k: usize,
    ) -> Result<Vec<(i64, f32)>, DomainError> {
        let mut query_vector = self.provider.embed(query).await?;
        l2_normalize(&mut query_vector);

        Ok(index.top_k(&query_vector, k))
    }
}
