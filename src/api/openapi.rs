//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, livros};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Livraria API",
        version = "1.0.0",
        description = "Book catalog REST API"
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Livros
        livros::get_all_livros,
        livros::get_livro_by_id,
        livros::get_livros_by_nome,
        livros::create_livro,
        livros::update_livro,
        livros::delete_livro,
    ),
    components(
        schemas(
            health::HealthResponse,
            crate::models::livro::Livro,
            crate::models::livro::CreateLivro,
            crate::models::livro::UpdateLivro,
            crate::error::ErrorResponse,
            crate::error::FieldError,
        )
    ),
    tags(
        (name = "livros", description = "Book catalog operations"),
        (name = "health", description = "Service health probes")
    )
)]
pub struct ApiDoc;

/// Create the swagger-ui router serving the generated document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
