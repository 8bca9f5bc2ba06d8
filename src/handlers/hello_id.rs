use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// GET /hello/{id} handler - Greet from the record store
///
/// Parses the path segment as a 64-bit integer, looks the record up, and
/// renders "Hello <message>" as plain text.
#[utoipa::path(
    get,
    path = routes::HELLO_ITEM,
    params(
        ("id" = String, Path, description = "Integer primary key of the record")
    ),
    responses(
        (status = 200, description = "Record found", body = String, content_type = "text/plain"),
        (status = 400, description = "Id is not a 64-bit integer", body = ErrorResponse),
        (status = 404, description = "No record with that id", body = ErrorResponse),
        (status = 503, description = "Record store unavailable", body = ErrorResponse)
    ),
    tag = "hello"
)]
pub async fn hello_id_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, String), ApiError> {
    let id = parse_id(&id_str)?;

    let greeting = state.greeter.hello_for(id).await?;
    tracing::info!("Greeted record with id: {}", id);
    Ok((StatusCode::OK, greeting))
}

/// Parse the raw path segment as a record id
///
/// Parsed here rather than by the extractor so a malformed id maps to the
/// BadRequest condition instead of axum's default rejection.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}
