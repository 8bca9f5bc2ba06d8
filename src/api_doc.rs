use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-spanner-hello API",
        version = "1.0.0",
        description = "A greeting service looking up messages by id in Google Cloud Spanner"
    ),
    paths(
        handlers::home::home_handler,
        handlers::hello::hello_handler,
        handlers::hello_id::hello_id_handler,
        handlers::health::health_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "hello", description = "Greeting operations"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;
