//! Entity store implementations

mod cached;
mod in_memory;

pub use cached::CachedPetStore;
pub use in_memory::InMemoryPetStore;
