//! Pet Battler
//!
//! Battle pet reference data system:
//! - Static type-effectiveness chart over the ten pet types
//! - Entity store for pets and abilities with bulk loading
//! - Read-through cache in front of every store read
//! - Embedding-based similarity search over both collections

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use config::EmbeddingBackend;
use domain::embedding::EmbeddingProvider;
use domain::store::PetStore;
use domain::type_chart::TypeChart;
use infrastructure::cache::{InMemoryCache, InMemoryCacheConfig};
use infrastructure::embedding::{HashEmbeddingProvider, OpenAiEmbeddingProvider};
use infrastructure::search::VectorSearchIndex;
use infrastructure::services::EffectivenessEngine;
use infrastructure::store::{CachedPetStore, InMemoryPetStore};

/// Shared application state: the cached store plus the two query components
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<dyn PetStore>,
    pub engine: Arc<EffectivenessEngine>,
    pub search: Arc<VectorSearchIndex>,
}

/// Create the application state with all components initialized
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let base_store = Arc::new(InMemoryPetStore::new());

    let cache = Arc::new(InMemoryCache::with_config(
        InMemoryCacheConfig::default()
            .with_max_capacity(config.cache.max_capacity)
            .with_default_ttl(Duration::from_secs(config.cache.ttl_secs)),
    ));

    let store: Arc<dyn PetStore> = Arc::new(CachedPetStore::new(
        base_store,
        cache,
        Duration::from_secs(config.cache.ttl_secs),
    ));

    let provider = create_embedding_provider(config)?;
    info!("Embedding provider: {}", provider.provider_name());

    let engine = Arc::new(EffectivenessEngine::new(
        store.clone(),
        TypeChart::standard(),
    ));
    let search = Arc::new(VectorSearchIndex::new(store.clone(), provider));

    Ok(AppState {
        store,
        engine,
        search,
    })
}

fn create_embedding_provider(
    config: &AppConfig,
) -> anyhow::Result<Arc<dyn EmbeddingProvider>> {
    match config.embedding.backend {
        EmbeddingBackend::Hash => Ok(Arc::new(HashEmbeddingProvider::new())),
        EmbeddingBackend::OpenAi => {
            let api_key = config
                .embedding
                .api_key
                .clone()
                .or_else(|| std::env::var("OPENAI_API_KEY").ok())
                .ok_or_else(|| {
                    anyhow::anyhow!("OpenAI embedding backend requires an API key")
                })?;

            Ok(Arc::new(
                OpenAiEmbeddingProvider::with_base_url(api_key, config.embedding.base_url.as_str())
                    .with_model(config.embedding.model.as_str(), config.embedding.dimensions),
            ))
        }
    }
}
