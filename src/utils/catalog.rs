//! Catálogos de códigos y mensajes técnicos
//!
//! Tablas estáticas de solo lectura que mantienen consistentes los textos
//! de error expuestos al cliente.

use axum::http::StatusCode;

/// Código técnico asociado a un `AppError::Internal`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechnicalCode {
    RequestInvalid,
    Unauthorized,
    InternalServerError,
}

impl TechnicalCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            TechnicalCode::RequestInvalid => StatusCode::BAD_REQUEST,
            TechnicalCode::Unauthorized => StatusCode::UNAUTHORIZED,
            TechnicalCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            TechnicalCode::RequestInvalid => "INVALID_DATA",
            TechnicalCode::Unauthorized => "CODE-401",
            TechnicalCode::InternalServerError => "CODE-500",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            TechnicalCode::RequestInvalid => "Datos erroneos en la entrada de la solicitud.",
            TechnicalCode::Unauthorized => "Usuario no autenticado.",
            TechnicalCode::InternalServerError => "Error interno del servidor.",
        }
    }
}

/// Catálogo de mensajes usado por las respuestas de error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechnicalMessage {
    InternalServerError,
    InternalErrorInAdapters,
    MinimumOrMaximumCapacity,
    BadRequest,
    NotFound,
    NoContent,
    InvalidRequest,
    AlreadyExists,
    NotOnlyNumbers,
    NameCharacterLimit,
    Unauthorized,
    XMessageId,
    DescriptionCharacterLimit,
}

impl TechnicalMessage {
    pub const ALL: [TechnicalMessage; 13] = [
        TechnicalMessage::InternalServerError,
        TechnicalMessage::InternalErrorInAdapters,
        TechnicalMessage::MinimumOrMaximumCapacity,
        TechnicalMessage::BadRequest,
        TechnicalMessage::NotFound,
        TechnicalMessage::NoContent,
        TechnicalMessage::InvalidRequest,
        TechnicalMessage::AlreadyExists,
        TechnicalMessage::NotOnlyNumbers,
        TechnicalMessage::NameCharacterLimit,
        TechnicalMessage::Unauthorized,
        TechnicalMessage::XMessageId,
        TechnicalMessage::DescriptionCharacterLimit,
    ];

    /// Código del catálogo. Normalmente un status HTTP, salvo `XMessageId`
    /// que guarda el nombre de la cabecera.
    pub fn code(&self) -> &'static str {
        match self {
            TechnicalMessage::InternalServerError => "500",
            TechnicalMessage::InternalErrorInAdapters => "503",
            TechnicalMessage::MinimumOrMaximumCapacity => "400",
            TechnicalMessage::BadRequest => "400",
            TechnicalMessage::NotFound => "404",
            TechnicalMessage::NoContent => "204",
            TechnicalMessage::InvalidRequest => "400",
            TechnicalMessage::AlreadyExists => "409",
            TechnicalMessage::NotOnlyNumbers => "400",
            TechnicalMessage::NameCharacterLimit => "400",
            TechnicalMessage::Unauthorized => "401",
            TechnicalMessage::XMessageId => "X-Message-ID",
            TechnicalMessage::DescriptionCharacterLimit => "400",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            TechnicalMessage::InternalServerError => "Internal server error",
            TechnicalMessage::InternalErrorInAdapters => "Internal error in adapters",
            TechnicalMessage::MinimumOrMaximumCapacity => {
                "A capability must have 3 to 20 unique technologies."
            }
            TechnicalMessage::BadRequest => "Bad request",
            TechnicalMessage::NotFound => "Not found",
            TechnicalMessage::NoContent => "No content",
            TechnicalMessage::InvalidRequest => "Request null or incomplete",
            TechnicalMessage::AlreadyExists => "Already exists",
            TechnicalMessage::NotOnlyNumbers => "The field must contain only numbers",
            TechnicalMessage::NameCharacterLimit => "Name must be between 3 and 50 characters",
            TechnicalMessage::Unauthorized => "Unauthorized access",
            TechnicalMessage::XMessageId => "Unique identifier for the message",
            TechnicalMessage::DescriptionCharacterLimit => {
                "Description must be between 3 and 100 characters"
            }
        }
    }

    pub fn parameter(&self) -> &'static str {
        ""
    }

    /// Status HTTP del mensaje, si su código es numérico
    pub fn http_status(&self) -> Option<StatusCode> {
        self.code()
            .parse::<u16>()
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
    }
}
