//! Deterministic hashing embedding provider for development and testing

use async_trait::async_trait;

use crate::domain::embedding::{l2_normalize, EmbeddingProvider};
use crate::domain::DomainError;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

const DEFAULT_DIMENSIONS: usize = 64;

/// Feature-hashing embedding provider.
///
/// Each lowercased whitespace token is hashed into a bucket with a sign bit,
/// and the resulting vector is normalized to unit length. Texts sharing
/// tokens land near each other, which is enough signal for local development
/// and deterministic tests without any network dependency.
#[derive(Debug)]
pub struct HashEmbeddingProvider {
    dimensions: usize,
}

impl HashEmbeddingProvider {
    pub fn new() -> Self {
        Self::with_dimensions(DEFAULT_DIMENSIONS)
    }

    pub fn with_dimensions(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn fnv1a(token: &str) -> u64 {
        let mut hash = FNV_OFFSET_BASIS;

        for byte in token.as_bytes() {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }

        hash
    }
}

impl Default for HashEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for HashEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        let mut vector = vec![0.0f32; self.dimensions];

        for token in text.split_whitespace() {
            let hash = Self::fnv1a(&token.to_lowercase());
            let bucket = (hash % self.dimensions as u64) as usize;
            let sign = if hash & (1u64 << 63) == 0 { 1.0 } else { -1.0 };

            vector[bucket] += sign;
        }

        l2_normalize(&mut vector);
        Ok(vector)
    }

    fn provider_name(&self) -> &'static str {
        "hash"
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::embedding::cosine_similarity;

    #[tokio::test]
    async fn test_embedding_is_deterministic() {
        let provider = HashEmbeddingProvider::new();

        let a = provider.embed("Bite. Deals 20 Beast damage.").await.unwrap();
        let b = provider.embed("Bite. Deals 20 Beast damage.").await.unwrap();

        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_embedding_has_configured_dimensions() {
        let provider = HashEmbeddingProvider::with_dimensions(32);

        let v = provider.embed("anything at all").await.unwrap();
        assert_eq!(v.len(), 32);
        assert_eq!(provider.dimensions(), 32);
    }

    #[tokio::test]
    async fn test_output_is_unit_length() {
        let provider = HashEmbeddingProvider::new();

        let v = provider.embed("a unit length vector").await.unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();

        assert!((norm - 1.0).abs() < 0.0001);
    }

    #[tokio::test]
    async fn test_shared_tokens_score_higher_than_disjoint() {
        let provider = HashEmbeddingProvider::new();

        let query = provider.embed("undead pet with plagued blood").await.unwrap();
        let close = provider
            .embed("a fast undead pet, plagued claws")
            .await
            .unwrap();
        let far = provider.embed("mechanical rocket barrage").await.unwrap();

        assert!(cosine_similarity(&query, &close) > cosine_similarity(&query, &far));
    }

    #[tokio::test]
    async fn test_empty_text_yields_zero_vector() {
        let provider = HashEmbeddingProvider::new();

        let v = provider.embed("").await.unwrap();
        assert!(v.iter().all(|x| *x == 0.0));
    }
}
