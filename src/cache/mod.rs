//! Cache
//!
//! Este módulo contiene el adaptador de cache sobre Redis.

pub mod cache_config;
pub mod redis_adapter;
pub mod redis_client;
pub mod store;

pub use cache_config::CacheConfig;
