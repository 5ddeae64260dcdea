//! Data models for the Livraria catalog

pub mod livro;

pub use livro::{CreateLivro, Livro, UpdateLivro};
