//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use changelog_domain::error::ChangelogError;
use changelog_domain::time::format_iso8601;

/// JSON error body returned by the API.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

/// Errors surfaced to HTTP clients.
#[derive(Debug)]
pub enum ApiError {
    /// The changelog body could not be handled.
    Changelog(ChangelogError),
    /// No route matches the method/path pair.
    NotFound,
}

impl From<ChangelogError> for ApiError {
    fn from(err: ChangelogError) -> Self {
        Self::Changelog(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Changelog(err @ ChangelogError::InvalidJson { .. }) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Invalid JSON",
                    timestamp: Some(format_iso8601(&err.timestamp())),
                },
            ),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "Not found",
                    timestamp: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
