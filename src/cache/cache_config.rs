//! Configuración de cache
//!
//! Este módulo contiene la configuración de conexión al almacén Redis.

use serde::{Deserialize, Serialize};

pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";

/// Configuración del cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    pub redis_url: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: DEFAULT_REDIS_URL.to_string(),
        }
    }
}
