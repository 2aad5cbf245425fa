//! Librería común: adaptador de cache Redis y traducción uniforme de
//! errores a respuestas HTTP.

pub mod cache;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod utils;

pub use cache::redis_adapter::RedisAdapter;
pub use utils::errors::{AppError, AppResult};
