//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::cache::redis_adapter::RedisAdapter;
use crate::cache::redis_client::RedisClient;
use crate::cache::store::KeyValueStore;
use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub cache: RedisAdapter,
    /// Cliente Redis real, ausente cuando el almacén es un stub
    pub redis: Option<RedisClient>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, redis: RedisClient) -> Self {
        let store: Arc<dyn KeyValueStore> = Arc::new(redis.clone());
        Self {
            config,
            cache: RedisAdapter::new(store),
            redis: Some(redis),
        }
    }

    /// Estado sobre un almacén arbitrario, sin cliente Redis
    pub fn with_store(config: EnvironmentConfig, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            config,
            cache: RedisAdapter::new(store),
            redis: None,
        }
    }

    /// Verificar si el almacén remoto responde
    pub async fn redis_connected(&self) -> bool {
        match &self.redis {
            Some(client) => client.is_connected().await,
            None => false,
        }
    }
}
