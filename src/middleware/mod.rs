//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS y el contexto de correlación
//! de cada petición.

pub mod cors;
pub mod request_context;

pub use cors::*;
pub use request_context::*;
