//! Embedding provider trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Black-box text-to-vector function.
///
/// Implementations must be deterministic: identical text yields an identical
/// vector within a model version.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Compute the embedding vector for the given text
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Fixed output dimensionality
    fn dimensions(&self) -> usize;
}
