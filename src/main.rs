mod api_doc;
mod config;
mod error;
mod greetings;
mod handlers;
mod routes;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use config::Config;

/// Build the application router.
///
/// Unmatched paths fall through to the not-found handler, and so do
/// requests that hit a registered path with an unregistered method, so
/// `POST /` answers 404 rather than 405.
fn app() -> Router {
    Router::new()
        .route(routes::ROOT, get(handlers::root_handler))
        .route(routes::NEW, get(handlers::new_handler))
        .fallback(handlers::not_found_handler)
        .method_not_allowed_fallback(handlers::not_found_handler)
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("greeting-server starting");

    let config = Config::from_env()?;
    config.log_startup();

    for (path, _) in greetings::GREETINGS {
        tracing::info!("Registered greeting route: {}", path);
    }

    let listener =
        tokio::net::TcpListener::bind((config.service_host.as_str(), config.service_port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app()).await?;

    Ok(())
}
