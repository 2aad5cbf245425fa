//! Utilidades del sistema
//!
//! Este módulo contiene los catálogos de mensajes, el error de aplicación
//! y su traducción a respuestas HTTP.

pub mod catalog;
pub mod error_handler;
pub mod errors;
