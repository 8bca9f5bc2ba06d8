use crate::routes;

/// GET /hello handler - Static greeting, no backend access
#[utoipa::path(
    get,
    path = routes::HELLO,
    responses(
        (status = 200, description = "Static greeting", body = String, content_type = "text/plain")
    ),
    tag = "hello"
)]
pub async fn hello_handler() -> &'static str {
    "Hello world"
}
