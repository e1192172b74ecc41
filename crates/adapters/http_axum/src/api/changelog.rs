//! `POST /changelog` — receive a change notification.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use changelog_app::ports::NotificationSink;
use changelog_domain::notification::Receipt;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the receive endpoint.
pub enum ReceiveResponse {
    /// Payload accepted; `200` with the receipt as JSON.
    Ok(Receipt),
}

impl IntoResponse for ReceiveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(receipt) => Json(receipt).into_response(),
        }
    }
}

/// `POST /changelog` — decode the collected body and acknowledge it.
///
/// # Errors
///
/// Returns [`ApiError::Changelog`] (HTTP 400) when the body is not JSON.
pub async fn receive<S>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<ReceiveResponse, ApiError>
where
    S: NotificationSink + Send + Sync + 'static,
{
    let receipt = state.changelog_service.receive(&body)?;
    Ok(ReceiveResponse::Ok(receipt))
}
