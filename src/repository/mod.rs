//! Repository layer for database operations.
//!
//! The only path to persistent storage: handlers never touch the pool
//! directly.

pub mod livros;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub livros: livros::LivrosRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            livros: livros::LivrosRepository::new(pool.clone()),
            pool,
        }
    }
}
