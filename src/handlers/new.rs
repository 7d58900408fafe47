use crate::greetings;
use crate::routes;
use axum::http::StatusCode;

/// GET /new handler - New endpoint greeting
#[utoipa::path(
    get,
    path = routes::NEW,
    responses(
        (status = 200, description = "New endpoint greeting", body = String, content_type = "text/plain")
    ),
    tag = "greetings"
)]
pub async fn new_handler() -> (StatusCode, &'static str) {
    tracing::debug!("Serving new endpoint greeting");
    (StatusCode::OK, greetings::NEW_GREETING)
}
