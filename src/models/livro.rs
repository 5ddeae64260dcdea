//! Livro (book) model and request types.
//!
//! Wire format keeps the catalog's canonical field names
//! (`titulo`/`autor`/`genero`/`preco`/`estoque`); timestamps serialize as
//! ISO-8601 and money uses `rust_decimal` to avoid float rounding on prices.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A persisted book record
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Livro {
    /// Storage-assigned identifier, never reused after deletion
    pub id: i32,
    pub titulo: String,
    pub autor: String,
    pub genero: String,
    pub preco: Decimal,
    pub estoque: i32,
    pub data_publicacao: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Candidate for a new book.
///
/// All fields are optional at the type level so that a request missing
/// several fields reports every problem at once instead of failing JSON
/// deserialization on the first absent field. `validate()` collects the
/// full list of field errors.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLivro {
    #[validate(
        required(message = "titulo is required"),
        custom(function = not_blank, message = "titulo must not be empty")
    )]
    pub titulo: Option<String>,
    #[validate(
        required(message = "autor is required"),
        custom(function = not_blank, message = "autor must not be empty")
    )]
    pub autor: Option<String>,
    #[validate(
        required(message = "genero is required"),
        custom(function = not_blank, message = "genero must not be empty")
    )]
    pub genero: Option<String>,
    #[validate(
        required(message = "preco is required"),
        custom(function = non_negative, message = "preco must be greater than or equal to 0")
    )]
    pub preco: Option<Decimal>,
    /// Defaults to 0 when absent
    #[validate(range(min = 0, message = "estoque must be greater than or equal to 0"))]
    pub estoque: Option<i32>,
    pub data_publicacao: Option<NaiveDate>,
}

impl CreateLivro {
    /// Stock level with the schema default applied
    pub fn estoque_or_default(&self) -> i32 {
        self.estoque.unwrap_or(0)
    }
}

/// Partial update for an existing book; absent fields are retained
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLivro {
    pub titulo: Option<String>,
    pub autor: Option<String>,
    pub genero: Option<String>,
    pub preco: Option<Decimal>,
    pub estoque: Option<i32>,
    pub data_publicacao: Option<NaiveDate>,
}

impl UpdateLivro {
    /// Merge this patch over an existing record, producing a candidate that
    /// is re-validated with the same rules as creation. Unpatched fields
    /// carry over unchanged.
    pub fn merged_with(&self, existing: &Livro) -> CreateLivro {
        CreateLivro {
            titulo: Some(
                self.titulo
                    .clone()
                    .unwrap_or_else(|| existing.titulo.clone()),
            ),
            autor: Some(self.autor.clone().unwrap_or_else(|| existing.autor.clone())),
            genero: Some(
                self.genero
                    .clone()
                    .unwrap_or_else(|| existing.genero.clone()),
            ),
            preco: Some(self.preco.unwrap_or(existing.preco)),
            estoque: Some(self.estoque.unwrap_or(existing.estoque)),
            data_publicacao: self.data_publicacao.or(existing.data_publicacao),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}
