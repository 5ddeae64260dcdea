//! Livros repository for database operations

use sqlx::{Pool, Postgres};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::livro::{CreateLivro, Livro, UpdateLivro},
};

const LIVRO_COLUMNS: &str =
    "id, titulo, autor, genero, preco, estoque, data_publicacao, created_at, updated_at";

/// Parse a raw path identifier. A malformed id can never name a stored
/// record, so it is reported as a validation failure rather than NotFound.
fn parse_id(id: &str) -> AppResult<i32> {
    id.trim()
        .parse::<i32>()
        .map_err(|_| AppError::invalid_field("id", format!("\"{}\" is not a valid livro id", id)))
}

/// Escape LIKE wildcards so a query matches them literally
fn escape_like(query: &str) -> String {
    query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[derive(Clone)]
pub struct LivrosRepository {
    pool: Pool<Postgres>,
}

impl LivrosRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get all livros in insertion order. An empty catalog is a normal
    /// result, not an error.
    pub async fn get_all(&self) -> AppResult<Vec<Livro>> {
        let livros = sqlx::query_as::<_, Livro>(&format!(
            "SELECT {} FROM livros ORDER BY id",
            LIVRO_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(livros)
    }

    /// Get a livro by its identifier
    pub async fn get_by_id(&self, id: &str) -> AppResult<Livro> {
        let id = parse_id(id)?;

        sqlx::query_as::<_, Livro>(&format!(
            "SELECT {} FROM livros WHERE id = $1",
            LIVRO_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Livro with id {} not found", id)))
    }

    /// Case-insensitive substring search on titulo.
    ///
    /// Zero matches is NotFound, not an empty list: unlike `get_all`, a
    /// search that finds nothing is a 404-equivalent. Legacy clients depend
    /// on this asymmetry.
    pub async fn search_by_titulo(&self, nome: &str) -> AppResult<Vec<Livro>> {
        let pattern = format!("%{}%", escape_like(nome));

        let livros = sqlx::query_as::<_, Livro>(&format!(
            r"SELECT {} FROM livros WHERE titulo ILIKE $1 ESCAPE '\' ORDER BY id",
            LIVRO_COLUMNS
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        if livros.is_empty() {
            return Err(AppError::NotFound(format!(
                "No livro found matching \"{}\"",
                nome
            )));
        }

        Ok(livros)
    }

    /// Validate and persist a new livro; storage assigns the id and both
    /// timestamps.
    pub async fn create(&self, candidate: &CreateLivro) -> AppResult<Livro> {
        candidate.validate()?;

        let livro = sqlx::query_as::<_, Livro>(&format!(
            r#"
            INSERT INTO livros (titulo, autor, genero, preco, estoque, data_publicacao, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, now(), now())
            RETURNING {}
            "#,
            LIVRO_COLUMNS
        ))
        .bind(candidate.titulo.as_deref())
        .bind(candidate.autor.as_deref())
        .bind(candidate.genero.as_deref())
        .bind(candidate.preco)
        .bind(candidate.estoque_or_default())
        .bind(candidate.data_publicacao)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(id = livro.id, titulo = %livro.titulo, "livro created");

        Ok(livro)
    }

    /// Merge a partial patch over the stored record, re-validate the merged
    /// result with the creation rules, and persist it in a single UPDATE.
    /// On validation failure nothing is written.
    pub async fn update(&self, id: &str, patch: &UpdateLivro) -> AppResult<Livro> {
        let existing = self.get_by_id(id).await?;

        let merged = patch.merged_with(&existing);
        merged.validate()?;

        let livro = sqlx::query_as::<_, Livro>(&format!(
            r#"
            UPDATE livros
            SET titulo = $1, autor = $2, genero = $3, preco = $4, estoque = $5,
                data_publicacao = $6, updated_at = now()
            WHERE id = $7
            RETURNING {}
            "#,
            LIVRO_COLUMNS
        ))
        .bind(merged.titulo.as_deref())
        .bind(merged.autor.as_deref())
        .bind(merged.genero.as_deref())
        .bind(merged.preco)
        .bind(merged.estoque_or_default())
        .bind(merged.data_publicacao)
        .bind(existing.id)
        .fetch_optional(&self.pool)
        .await?
        // The row can vanish between the read and the write; report it the
        // same way as an unknown id.
        .ok_or_else(|| AppError::NotFound(format!("Livro with id {} not found", existing.id)))?;

        tracing::info!(id = livro.id, "livro updated");

        Ok(livro)
    }

    /// Hard delete. Deleting an absent id is NotFound, including a second
    /// delete of the same id.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id)?;

        let result = sqlx::query("DELETE FROM livros WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Livro with id {} not found",
                id
            )));
        }

        tracing::info!(id, "livro deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_plain_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
    }

    #[test]
    fn test_parse_id_rejects_malformed_input() {
        for bad in ["abc", "", "12.5", "0x10", "9999999999999"] {
            let err = parse_id(bad).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{:?}", bad);
        }
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("hobbit"), "hobbit");
    }
}
