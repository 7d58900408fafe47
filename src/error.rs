use axum::{
    Json,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps error conditions to HTTP status codes and formats them as JSON
/// responses. The only error condition at this service's surface is a
/// request for which no greeting is registered.
#[derive(Debug)]
pub enum ApiError {
    /// No route registered for the requested method and path
    RouteNotFound(Method, Uri),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::RouteNotFound(method, uri) => (
                StatusCode::NOT_FOUND,
                format!("No route for {} {}", method, uri.path()),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
