//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{comments, health, visitors};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Guestbook API",
        version = "1.0.0",
        description = "Visitor counter and guestbook REST API"
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Visitors
        visitors::get_count,
        visitors::increment,
        // Comments
        comments::list_comments,
        comments::create_comment,
    ),
    components(
        schemas(
            crate::models::VisitorCountResponse,
            crate::models::CommentResponse,
            crate::models::CreateComment,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "visitors", description = "Visitor counter"),
        (name = "comments", description = "Guestbook comments")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
