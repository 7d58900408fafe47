use crate::greetings;
use crate::routes;
use axum::http::StatusCode;

/// GET / handler - Root greeting
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Root greeting", body = String, content_type = "text/plain")
    ),
    tag = "greetings"
)]
pub async fn root_handler() -> (StatusCode, &'static str) {
    tracing::debug!("Serving root greeting");
    (StatusCode::OK, greetings::ROOT_GREETING)
}
