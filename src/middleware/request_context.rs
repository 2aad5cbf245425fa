//! Contexto de correlación por petición
//!
//! Cada petición recibe un `RequestContext` con el identificador de mensaje
//! (cabecera `message-id`) y la ruta. Los logs posteriores se emiten dentro
//! de un span que lleva ambos campos.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderMap, Uri},
    middleware::Next,
    response::Response,
};
use tracing::{info_span, Instrument};

pub const MESSAGE_ID_HEADER: &str = "message-id";
pub const NO_MESSAGE: &str = "NOT_TRANSACTION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub message_id: String,
    pub path: String,
}

impl RequestContext {
    pub fn from_headers(headers: &HeaderMap, uri: &Uri) -> Self {
        let message_id = headers
            .get(MESSAGE_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or(NO_MESSAGE)
            .to_string();

        Self {
            message_id,
            path: uri.path().to_string(),
        }
    }
}

/// Middleware que adjunta el `RequestContext` a la petición
pub async fn request_context_middleware(mut request: Request, next: Next) -> Response {
    let context = RequestContext::from_headers(request.headers(), request.uri());
    let span = info_span!(
        "request",
        message_id = %context.message_id,
        path = %context.path
    );

    request.extensions_mut().insert(context);

    next.run(request).instrument(span).await
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(context) = parts.extensions.get::<RequestContext>() {
            return Ok(context.clone());
        }
        Ok(RequestContext::from_headers(&parts.headers, &parts.uri))
    }
}
