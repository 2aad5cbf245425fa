use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use tracing::warn;

use crate::controllers::cache_controller::CacheController;
use crate::dto::cache_dto::SaveCacheRequest;
use crate::middleware::request_context::RequestContext;
use crate::state::AppState;
use crate::utils::catalog::TechnicalMessage;
use crate::utils::error_handler::handle_error;
use crate::utils::errors::AppError;

pub fn create_cache_router() -> Router<AppState> {
    Router::new().route("/:key", get(get_value).put(save_value))
}

async fn save_value(
    State(state): State<AppState>,
    context: RequestContext,
    Path(key): Path<String>,
    body: Result<Json<SaveCacheRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("⚠️ Cuerpo JSON inválido: {}", rejection.body_text());
            let err = AppError::business_from(TechnicalMessage::InvalidRequest);
            return handle_error(&err, &context.message_id);
        }
    };

    let controller = CacheController::new(state.cache.clone());
    match controller.save(&key, request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => handle_error(&e, &context.message_id),
    }
}

async fn get_value(
    State(state): State<AppState>,
    context: RequestContext,
    Path(key): Path<String>,
) -> Response {
    let controller = CacheController::new(state.cache.clone());
    match controller.get(&key).await {
        Ok(Some(response)) => Json(response).into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_error(&e, &context.message_id),
    }
}
