use crate::error::ApiError;
use axum::http::{Method, Uri};

/// Fallback handler - answers any unregistered path or method with 404
///
/// Wired as both the router fallback and the method-not-allowed fallback,
/// so a wrong method on a registered path is indistinguishable from an
/// unknown path.
pub async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    tracing::info!("No route registered for {} {}", method, uri.path());
    ApiError::RouteNotFound(method, uri)
}
