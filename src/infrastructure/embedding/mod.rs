//! Embedding provider implementations

mod hash;
mod openai;

pub use hash::HashEmbeddingProvider;
pub use openai::OpenAiEmbeddingProvider;
