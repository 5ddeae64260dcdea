//! API handlers for the Livraria REST endpoints

pub mod health;
pub mod livros;
pub mod openapi;
