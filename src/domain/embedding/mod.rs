//! Embedding provider trait and vector math

mod provider;
mod vector;

pub use provider::EmbeddingProvider;
pub use vector::{cosine_similarity, inner_product, l2_normalize};
