use crate::routes;

/// GET / handler - Homepage
#[utoipa::path(
    get,
    path = routes::HOME,
    responses(
        (status = 200, description = "Homepage greeting", body = String, content_type = "text/plain")
    ),
    tag = "hello"
)]
pub async fn home_handler() -> &'static str {
    "You've hit the homepage"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    fn test_app() -> Router {
        Router::new().route(crate::routes::HOME, get(home_handler))
    }

    #[tokio::test]
    async fn test_home_endpoint() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"You've hit the homepage");
    }

    #[tokio::test]
    async fn test_home_endpoint_is_idempotent() {
        let app = test_app();

        let mut bodies = Vec::new();
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            bodies.push(
                axum::body::to_bytes(response.into_body(), usize::MAX)
                    .await
                    .unwrap(),
            );
        }

        assert_eq!(bodies[0], bodies[1]);
    }
}
