mod api_doc;
mod config;
mod error;
mod greeting;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use greeting::GreetingService;
use handlers::{health_handler, hello_handler, hello_id_handler, home_handler};
use state::AppState;
use store::RecordStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("rust-spanner-hello starting");

    let config = Config::from_env()?;
    config.log_startup();

    // Static routes are always served; the store-backed routes join them
    // only when Spanner is configured.
    let mut app = Router::new()
        .route(routes::HOME, get(home_handler))
        .route(routes::HELLO, get(hello_handler));

    if let Some(spanner) = &config.spanner {
        let store = RecordStore::from_config(spanner).await?;
        let greeter = GreetingService::new(store.clone());
        let state = AppState {
            store,
            greeter,
            config: Arc::new(config.clone()),
        };

        app = app.merge(
            Router::new()
                .route(routes::HELLO_ITEM, get(hello_id_handler))
                .route(routes::HEALTH, get(health_handler))
                .with_state(state),
        );
    }

    let app = app
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
