use serde::{Deserialize, Serialize};

// Save request
#[derive(Debug, Deserialize)]
pub struct SaveCacheRequest {
    pub value: Option<String>,
    pub ttl_seconds: Option<i64>,
}

// Save response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveCacheResponse {
    pub key: String,
    pub ttl_seconds: i64,
}

// Get response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheValueResponse {
    pub key: String,
    pub value: String,
}
