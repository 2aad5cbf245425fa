//! Contrato del almacén clave-valor remoto
//!
//! `RedisAdapter` solo habla con el almacén a través de `KeyValueStore`,
//! lo que permite sustituir Redis por un stub en los tests.

use std::time::Duration;

use redis::{ErrorKind, RedisError};
use thiserror::Error;

use crate::utils::errors::AppError;

/// Errores que puede devolver un almacén clave-valor
#[derive(Error, Debug)]
pub enum StoreError {
    /// No se pudo alcanzar el almacén
    #[error("Connection failure: {0}")]
    Connection(String),

    /// El almacén respondió con un error propio
    #[error("Store system error: {0}")]
    System(String),

    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<RedisError> for StoreError {
    fn from(e: RedisError) -> Self {
        if e.is_io_error() || e.is_connection_refusal() || e.is_connection_dropped() || e.is_timeout() {
            return StoreError::Connection(e.to_string());
        }

        match e.kind() {
            ErrorKind::TypeError => StoreError::Unexpected(anyhow::Error::new(e)),
            _ => StoreError::System(e.to_string()),
        }
    }
}

/// Operaciones mínimas sobre el almacén remoto
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Guardar `value` bajo `key` con expiración `ttl`
    async fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError>;

    /// Leer `key`. La ausencia se devuelve como `None`.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
}
