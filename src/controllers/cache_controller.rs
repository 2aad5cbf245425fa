use chrono::Duration;

use crate::cache::redis_adapter::RedisAdapter;
use crate::dto::cache_dto::{CacheValueResponse, SaveCacheRequest, SaveCacheResponse};
use crate::utils::errors::AppResult;

pub struct CacheController {
    adapter: RedisAdapter,
}

impl CacheController {
    pub fn new(adapter: RedisAdapter) -> Self {
        Self { adapter }
    }

    pub async fn save(&self, key: &str, request: SaveCacheRequest) -> AppResult<SaveCacheResponse> {
        let ttl = request.ttl_seconds.map(ttl_from_seconds);
        let value = request.value.as_deref().unwrap_or("");

        self.adapter.save(key, value, ttl).await?;

        Ok(SaveCacheResponse {
            key: key.to_string(),
            ttl_seconds: request.ttl_seconds.unwrap_or_default(),
        })
    }

    pub async fn get(&self, key: &str) -> AppResult<Option<CacheValueResponse>> {
        let value = self.adapter.get(key).await?;

        Ok(value.map(|value| CacheValueResponse {
            key: key.to_string(),
            value,
        }))
    }
}

/// Segundos fuera del rango de `Duration` se saturan al extremo con su signo
fn ttl_from_seconds(seconds: i64) -> Duration {
    Duration::try_seconds(seconds).unwrap_or(if seconds < 0 { Duration::MIN } else { Duration::MAX })
}
