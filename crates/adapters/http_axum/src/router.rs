//! Axum router assembly.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::post;
use tower_http::trace::TraceLayer;

use changelog_app::ports::NotificationSink;

use crate::api::{self, changelog};
use crate::state::AppState;

/// Path of the single recognized route.
pub const CHANGELOG_PATH: &str = "/changelog";

/// Build the top-level axum [`Router`].
///
/// Only `POST /changelog` is routed; other methods on that path and all
/// other paths fall through to the JSON 404 handler, so clients never see
/// a `405`. A request target with a query string is also not found. The body size limit is disabled: notifications are buffered
/// whole. Includes a [`TraceLayer`] that logs each HTTP request/response
/// using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: NotificationSink + Send + Sync + 'static,
{
    Router::new()
        .route(
            CHANGELOG_PATH,
            post(changelog::receive::<S>)
                .fallback(api::not_found)
                .layer(middleware::from_fn(api::exact_target)),
        )
        .fallback(api::not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
