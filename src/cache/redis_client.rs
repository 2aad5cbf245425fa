use std::time::Duration;

use anyhow::Result;
use redis::{aio::ConnectionManager, AsyncCommands};
use tracing::{debug, info};

use super::store::{KeyValueStore, StoreError};
use super::CacheConfig;

/// Cliente Redis con connection pooling y operaciones async
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// Crear nuevo cliente Redis
    pub async fn new(config: CacheConfig) -> Result<Self> {
        info!("🔗 Conectando a Redis: {}", config.redis_url);

        let client = redis::Client::open(config.redis_url.clone())?;
        let manager = ConnectionManager::new(client).await?;

        // Test de conexión usando un comando simple
        let mut conn = manager.clone();
        let _: () = redis::cmd("PING").query_async(&mut conn).await?;

        info!("✅ Redis conectado exitosamente");

        Ok(Self { manager })
    }

    /// Verificar si Redis está conectado
    pub async fn is_connected(&self) -> bool {
        let mut conn = self.manager.clone();
        match redis::cmd("PING").query_async::<_, String>(&mut conn).await {
            Ok(response) => response == "PONG",
            Err(_) => false,
        }
    }
}

/// Argumentos de expiración para `SET`: `EX` si el TTL son segundos exactos,
/// `PX` en otro caso (mínimo 1 ms).
fn expiry_args(ttl: Duration) -> (&'static str, u64) {
    if ttl.subsec_nanos() == 0 {
        ("EX", ttl.as_secs())
    } else {
        let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        ("PX", millis.max(1))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for RedisClient {
    async fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        let (unit, amount) = expiry_args(ttl);

        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg(unit)
            .arg(amount)
            .query_async::<_, ()>(&mut conn)
            .await?;

        debug!("💾 SET {} {} {}", key, unit, amount);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.manager.clone();
        let value = conn.get::<_, Option<String>>(key).await?;
        Ok(value)
    }
}
