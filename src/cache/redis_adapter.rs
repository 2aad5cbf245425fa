//! Adaptador de cache sobre el almacén remoto
//!
//! Cada operación sigue el mismo flujo: validar, una sola llamada remota,
//! log del resultado y traducción del error a `AppError`. Ningún error del
//! transporte sale de este módulo.

use std::sync::Arc;

use chrono::Duration;
use tracing::{error, info};

use super::store::{KeyValueStore, StoreError};
use crate::utils::errors::{AppError, AppResult};

pub const MSG_KEY_EMPTY: &str = "Key cannot be null or empty";
pub const MSG_VALUE_EMPTY: &str = "Value cannot be null or empty";
pub const MSG_DURATION_NULL: &str = "Duration cannot be null";
pub const MSG_DURATION_NOT_POSITIVE: &str = "Duration must be positive";

pub const MSG_CONNECTION_FAILURE: &str = "Failed to connect to Redis";
pub const MSG_SYSTEM_ERROR: &str = "Redis system error";
pub const MSG_UNEXPECTED: &str = "Unexpected error in Redis operation";

#[derive(Clone)]
pub struct RedisAdapter {
    store: Arc<dyn KeyValueStore>,
}

impl RedisAdapter {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Guardar `value` bajo `key` durante `ttl`.
    ///
    /// `ttl` en `None` o no positivo falla sin tocar el almacén.
    pub async fn save(&self, key: &str, value: &str, ttl: Option<Duration>) -> AppResult<()> {
        let outcome: Result<(), StoreError> = async {
            let ttl = validate_save_inputs(key, value, ttl)?;
            self.store.set_with_expiry(key, value, ttl).await
        }
        .await;

        match outcome {
            Ok(()) => {
                info!("💾 Redis: valor guardado (clave: {})", key);
                Ok(())
            }
            Err(e) => {
                error!("❌ Redis: error guardando valor (clave: {})", key);
                Err(map_store_error(e))
            }
        }
    }

    /// Leer el valor de `key`. Una clave ausente devuelve `Ok(None)`.
    pub async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let outcome: Result<Option<String>, StoreError> = async {
            validate_key(key)?;
            self.store.get(key).await
        }
        .await;

        match outcome {
            Ok(value) => {
                let status = if value.is_some() { "valor recuperado" } else { "clave no encontrada" };
                info!("📥 Redis: {} (clave: {})", status, key);
                Ok(value)
            }
            Err(e) => {
                error!("❌ Redis: error leyendo valor (clave: {})", key);
                Err(map_store_error(e))
            }
        }
    }
}

fn has_text(s: &str) -> bool {
    !s.trim().is_empty()
}

fn validate_key(key: &str) -> AppResult<()> {
    if !has_text(key) {
        return Err(AppError::internal(MSG_KEY_EMPTY));
    }
    Ok(())
}

fn validate_save_inputs(
    key: &str,
    value: &str,
    ttl: Option<Duration>,
) -> AppResult<std::time::Duration> {
    validate_key(key)?;
    if !has_text(value) {
        return Err(AppError::internal(MSG_VALUE_EMPTY));
    }
    let ttl = ttl.ok_or_else(|| AppError::internal(MSG_DURATION_NULL))?;
    if ttl <= Duration::zero() {
        return Err(AppError::internal(MSG_DURATION_NOT_POSITIVE));
    }
    ttl.to_std()
        .map_err(|_| AppError::internal(MSG_DURATION_NOT_POSITIVE))
}

/// Traducir un error del almacén al error de aplicación
pub fn map_store_error(err: StoreError) -> AppError {
    match err {
        StoreError::App(app) => app,
        StoreError::Connection(_) => AppError::internal(MSG_CONNECTION_FAILURE),
        StoreError::System(_) => AppError::internal(MSG_SYSTEM_ERROR),
        StoreError::Unexpected(e) => {
            error!("Error inesperado durante operación Redis: {}: {:?}", MSG_UNEXPECTED, e);
            AppError::internal(MSG_UNEXPECTED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::catalog::TechnicalCode;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tracing_test::traced_test;

    enum Failure {
        Connection,
        System,
        Unexpected,
        App,
    }

    /// Almacén en memoria que cuenta las llamadas recibidas
    #[derive(Default)]
    struct StubStore {
        data: Mutex<HashMap<String, String>>,
        fail_with: Option<Failure>,
        set_calls: AtomicUsize,
        get_calls: AtomicUsize,
    }

    impl StubStore {
        fn failing(failure: Failure) -> Self {
            Self {
                fail_with: Some(failure),
                ..Default::default()
            }
        }

        fn failure(&self) -> Option<StoreError> {
            self.fail_with.as_ref().map(|f| match f {
                Failure::Connection => StoreError::Connection("connection refused".into()),
                Failure::System => StoreError::System("ERR out of memory".into()),
                Failure::Unexpected => StoreError::Unexpected(anyhow::anyhow!("decoder exploded")),
                Failure::App => StoreError::App(AppError::technical(
                    TechnicalCode::RequestInvalid,
                    Some("custom info".to_string()),
                )),
            })
        }

        fn calls(&self) -> usize {
            self.set_calls.load(Ordering::SeqCst) + self.get_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl KeyValueStore for StubStore {
        async fn set_with_expiry(
            &self,
            key: &str,
            value: &str,
            _ttl: std::time::Duration,
        ) -> Result<(), StoreError> {
            self.set_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(e) = self.failure() {
                return Err(e);
            }
            self.data.lock().unwrap().insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(e) = self.failure() {
                return Err(e);
            }
            Ok(self.data.lock().unwrap().get(key).cloned())
        }
    }

    fn adapter(store: StubStore) -> (RedisAdapter, Arc<StubStore>) {
        let store = Arc::new(store);
        (RedisAdapter::new(store.clone()), store)
    }

    fn assert_internal(err: &AppError, info: &str) {
        assert_eq!(err.technical_code(), Some(TechnicalCode::InternalServerError));
        assert_eq!(err.additional_info(), Some(info));
    }

    #[tokio::test]
    async fn test_blank_keys_never_reach_store() {
        let (adapter, store) = adapter(StubStore::default());

        for key in ["", " ", "\t\n"] {
            let err = adapter.save(key, "v", Some(Duration::seconds(10))).await.unwrap_err();
            assert_internal(&err, MSG_KEY_EMPTY);

            let err = adapter.get(key).await.unwrap_err();
            assert_internal(&err, MSG_KEY_EMPTY);
        }

        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_value_never_reaches_store() {
        let (adapter, store) = adapter(StubStore::default());

        let err = adapter.save("k", "  ", Some(Duration::seconds(10))).await.unwrap_err();
        assert_internal(&err, MSG_VALUE_EMPTY);
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_ttl_never_reaches_store() {
        let (adapter, store) = adapter(StubStore::default());

        let err = adapter.save("k", "v", None).await.unwrap_err();
        assert_internal(&err, MSG_DURATION_NULL);

        for ttl in [Duration::zero(), Duration::seconds(-5), Duration::milliseconds(-1)] {
            let err = adapter.save("k", "v", Some(ttl)).await.unwrap_err();
            assert_internal(&err, MSG_DURATION_NOT_POSITIVE);
        }

        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_validation_checks_key_first() {
        let (adapter, _) = adapter(StubStore::default());

        let err = adapter.save("", "", None).await.unwrap_err();
        assert_internal(&err, MSG_KEY_EMPTY);

        let err = adapter.save("k", "", None).await.unwrap_err();
        assert_internal(&err, MSG_VALUE_EMPTY);
    }

    #[traced_test]
    #[tokio::test]
    async fn test_save_logs_key_once_and_never_value() {
        let (adapter, store) = adapter(StubStore::default());

        adapter
            .save("k", "secret-payload", Some(Duration::seconds(10)))
            .await
            .unwrap();

        assert_eq!(store.set_calls.load(Ordering::SeqCst), 1);
        assert!(!logs_contain("secret-payload"));
        logs_assert(|lines: &[&str]| {
            let saved = lines
                .iter()
                .filter(|line| line.contains("INFO") && line.contains("(clave: k)"))
                .count();
            match saved {
                1 => Ok(()),
                n => Err(format!("esperaba 1 log INFO con la clave, hubo {}", n)),
            }
        });
    }

    #[tokio::test]
    async fn test_get_returns_saved_value() {
        let (adapter, store) = adapter(StubStore::default());

        adapter.save("k", "v", Some(Duration::seconds(10))).await.unwrap();
        let value = adapter.get("k").await.unwrap();

        assert_eq!(value.as_deref(), Some("v"));
        assert_eq!(store.get_calls.load(Ordering::SeqCst), 1);
    }

    #[traced_test]
    #[tokio::test]
    async fn test_get_missing_key_is_not_an_error() {
        let (adapter, _) = adapter(StubStore::default());

        let value = adapter.get("missing").await.unwrap();

        assert!(value.is_none());
        assert!(logs_contain("clave no encontrada (clave: missing)"));
    }

    #[tokio::test]
    async fn test_connection_failure_maps_for_both_operations() {
        let (adapter, _) = adapter(StubStore::failing(Failure::Connection));

        let err = adapter.save("k", "v", Some(Duration::seconds(1))).await.unwrap_err();
        assert_internal(&err, MSG_CONNECTION_FAILURE);

        let err = adapter.get("k").await.unwrap_err();
        assert_internal(&err, MSG_CONNECTION_FAILURE);
    }

    #[tokio::test]
    async fn test_system_failure_maps_to_system_error() {
        let (adapter, _) = adapter(StubStore::failing(Failure::System));

        let err = adapter.get("k").await.unwrap_err();
        assert_internal(&err, MSG_SYSTEM_ERROR);
    }

    #[traced_test]
    #[tokio::test]
    async fn test_unexpected_failure_is_logged_and_hidden() {
        let (adapter, _) = adapter(StubStore::failing(Failure::Unexpected));

        let err = adapter.save("k", "v", Some(Duration::seconds(1))).await.unwrap_err();

        assert_internal(&err, MSG_UNEXPECTED);
        assert!(logs_contain("decoder exploded"));
    }

    #[tokio::test]
    async fn test_application_errors_pass_through_unchanged() {
        let (adapter, _) = adapter(StubStore::failing(Failure::App));

        let err = adapter.get("k").await.unwrap_err();

        assert_eq!(err.technical_code(), Some(TechnicalCode::RequestInvalid));
        assert_eq!(err.additional_info(), Some("custom info"));
    }
}
