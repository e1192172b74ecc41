//! JSON API handlers.

pub mod changelog;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

/// Handler for every request that does not match a route.
///
/// The request body is never read.
pub async fn not_found() -> Response {
    ApiError::NotFound.into_response()
}

/// Route only on the exact request target: a URI carrying a query string,
/// even an empty one, is not found.
pub async fn exact_target(request: Request, next: Next) -> Response {
    if request.uri().query().is_some() {
        return not_found().await;
    }
    next.run(request).await
}
