//! Livro (catalog) endpoints.
//!
//! Each handler is a stateless translation: one repository call in, one
//! response out. All failure mapping lives on `AppError`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::livro::{CreateLivro, Livro, UpdateLivro},
};

/// List all livros
#[utoipa::path(
    get,
    path = "/livros",
    tag = "livros",
    responses(
        (status = 200, description = "List of livros (empty catalog yields an empty list)", body = Vec<Livro>)
    )
)]
pub async fn get_all_livros(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Livro>>> {
    let livros = state.repository.livros.get_all().await?;
    Ok(Json(livros))
}

/// Get a livro by ID
#[utoipa::path(
    get,
    path = "/livros/{id}",
    tag = "livros",
    params(
        ("id" = String, Path, description = "Livro ID")
    ),
    responses(
        (status = 200, description = "Livro found", body = Livro),
        (status = 400, description = "Malformed id", body = crate::error::ErrorResponse),
        (status = 404, description = "Livro not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_livro_by_id(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Livro>> {
    let livro = state.repository.livros.get_by_id(&id).await?;
    Ok(Json(livro))
}

/// Search livros by title (case-insensitive substring match)
#[utoipa::path(
    get,
    path = "/livros/nome/{nome}",
    tag = "livros",
    params(
        ("nome" = String, Path, description = "Title or part of the title to search for")
    ),
    responses(
        (status = 200, description = "Matching livros", body = Vec<Livro>),
        (status = 404, description = "No livro matched the query", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_livros_by_nome(
    State(state): State<crate::AppState>,
    Path(nome): Path<String>,
) -> AppResult<Json<Vec<Livro>>> {
    let livros = state.repository.livros.search_by_titulo(&nome).await?;
    Ok(Json(livros))
}

/// Create a new livro
#[utoipa::path(
    post,
    path = "/livros",
    tag = "livros",
    request_body = CreateLivro,
    responses(
        (status = 201, description = "Livro created", body = Livro),
        (status = 400, description = "Invalid livro data", body = crate::error::ErrorResponse),
        (status = 409, description = "Duplicate livro", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_livro(
    State(state): State<crate::AppState>,
    Json(candidate): Json<CreateLivro>,
) -> AppResult<(StatusCode, Json<Livro>)> {
    let created = state.repository.livros.create(&candidate).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing livro (partial update; absent fields are retained)
#[utoipa::path(
    put,
    path = "/livros/{id}",
    tag = "livros",
    params(
        ("id" = String, Path, description = "Livro ID")
    ),
    request_body = UpdateLivro,
    responses(
        (status = 200, description = "Livro updated", body = Livro),
        (status = 400, description = "Invalid livro data", body = crate::error::ErrorResponse),
        (status = 404, description = "Livro not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_livro(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateLivro>,
) -> AppResult<Json<Livro>> {
    let updated = state.repository.livros.update(&id, &patch).await?;
    Ok(Json(updated))
}

/// Delete a livro
#[utoipa::path(
    delete,
    path = "/livros/{id}",
    tag = "livros",
    params(
        ("id" = String, Path, description = "Livro ID")
    ),
    responses(
        (status = 204, description = "Livro deleted"),
        (status = 400, description = "Malformed id", body = crate::error::ErrorResponse),
        (status = 404, description = "Livro not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_livro(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.repository.livros.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
