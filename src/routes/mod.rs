pub mod cache_routes;
pub mod health_routes;

use axum::{middleware, Router};

use crate::middleware::cors::cors_middleware;
use crate::middleware::request_context::request_context_middleware;
use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes::create_health_router())
        .nest("/api/cache", cache_routes::create_cache_router())
        .layer(middleware::from_fn(request_context_middleware))
        .layer(cors_middleware())
        .with_state(state)
}
