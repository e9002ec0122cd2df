//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, CacheConfig, DataConfig, EmbeddingBackend, EmbeddingConfig, LogFormat,
    LoggingConfig, SearchConfig,
};
