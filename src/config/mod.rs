//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y la configuración
//! del servidor.

pub mod environment;

pub use environment::*;
