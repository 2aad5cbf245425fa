//! Sistema de manejo de errores
//!
//! Este módulo define el error de aplicación que sale de los adaptadores
//! y llega al traductor de respuestas HTTP.

use thiserror::Error;

use super::catalog::{TechnicalCode, TechnicalMessage};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Regla de dominio violada
    #[error("{message}")]
    Business {
        message: String,
        parameter: Option<String>,
    },

    #[error("{0}")]
    Unauthorized(String),

    /// Fallo técnico con su código de catálogo e información adicional
    #[error("{}", .code.message())]
    Internal {
        code: TechnicalCode,
        info: Option<String>,
    },

    /// Cualquier otro error en tiempo de ejecución
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl AppError {
    /// Error interno con `INTERNAL_SERVER_ERROR` y un texto descriptivo
    pub fn internal(info: impl Into<String>) -> Self {
        AppError::Internal {
            code: TechnicalCode::InternalServerError,
            info: Some(info.into()),
        }
    }

    pub fn technical(code: TechnicalCode, info: Option<String>) -> Self {
        AppError::Internal { code, info }
    }

    pub fn business(message: impl Into<String>, parameter: impl Into<String>) -> Self {
        AppError::Business {
            message: message.into(),
            parameter: Some(parameter.into()),
        }
    }

    /// Error de negocio tomado del catálogo
    pub fn business_from(entry: TechnicalMessage) -> Self {
        AppError::business(entry.message(), entry.parameter())
    }

    pub fn unauthorized(entry: TechnicalMessage) -> Self {
        AppError::Unauthorized(entry.message().to_string())
    }

    /// Código técnico del error. Solo los errores internos lo llevan.
    pub fn technical_code(&self) -> Option<TechnicalCode> {
        match self {
            AppError::Internal { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Texto adicional de un error interno
    pub fn additional_info(&self) -> Option<&str> {
        match self {
            AppError::Internal { info, .. } => info.as_deref(),
            _ => None,
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
