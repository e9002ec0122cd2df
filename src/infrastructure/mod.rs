//! Infrastructure layer - concrete implementations of the domain traits

pub mod cache;
pub mod embedding;
pub mod logging;
pub mod search;
pub mod services;
pub mod store;
