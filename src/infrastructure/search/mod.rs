//! Vector similarity search infrastructure

mod vector_index;

pub use vector_index::VectorSearchIndex;
