//! Traductor global de errores
//!
//! Convierte cualquier `AppError` en una respuesta HTTP con cuerpo
//! `ApiResponse` y el identificador de correlación de la petición.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use tracing::error;

use crate::dto::api_response::{ApiResponse, ErrorDto};
use super::catalog::TechnicalMessage;
use super::errors::AppError;

/// Construir el status y el cuerpo de error para `error`.
///
/// Orden de evaluación: no autenticado, negocio, y el resto como error
/// interno. El texto original de un error interno nunca llega al cliente.
pub fn build_error_response(error: &AppError, message_id: &str) -> (StatusCode, ApiResponse) {
    error!("🚨 Error capturado globalmente: {:?}", error);

    match error {
        AppError::Unauthorized(message) => build(
            StatusCode::UNAUTHORIZED,
            message_id,
            TechnicalMessage::Unauthorized,
            ErrorDto::of(
                message.as_str(),
                Some(TechnicalMessage::Unauthorized.parameter().to_string()),
            ),
        ),
        AppError::Business { message, parameter } => build(
            StatusCode::BAD_REQUEST,
            message_id,
            TechnicalMessage::BadRequest,
            ErrorDto::of(message.as_str(), parameter.clone()),
        ),
        AppError::Internal { .. } | AppError::Unexpected(_) => build(
            StatusCode::INTERNAL_SERVER_ERROR,
            message_id,
            TechnicalMessage::InternalServerError,
            ErrorDto::of(
                TechnicalMessage::InternalServerError.message(),
                Some(TechnicalMessage::InternalServerError.parameter().to_string()),
            ),
        ),
    }
}

/// Traducir `error` a una respuesta axum lista para enviar
pub fn handle_error(error: &AppError, message_id: &str) -> Response {
    let (status, body) = build_error_response(error, message_id);
    (status, Json(body)).into_response()
}

fn build(
    status: StatusCode,
    message_id: &str,
    entry: TechnicalMessage,
    detail: ErrorDto,
) -> (StatusCode, ApiResponse) {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let body = ApiResponse::error(
        status.as_u16(),
        entry.message(),
        message_id,
        timestamp,
        vec![detail],
    );
    (status, body)
}
