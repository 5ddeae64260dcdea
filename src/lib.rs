//! Livraria Book Catalog Service
//!
//! A Rust REST API server managing a bookstore's catalog of livros:
//! create, retrieve (by id, by title substring, or all), update, delete.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: repository::Repository,
}
