//! Shared application state for axum handlers.

use std::sync::Arc;

use changelog_app::ports::NotificationSink;
use changelog_app::services::changelog_service::ChangelogService;

/// Application state shared across all axum handlers.
///
/// Generic over the notification sink to avoid dynamic dispatch.
/// `Clone` is implemented manually so the sink itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Receive use-case.
    pub changelog_service: Arc<ChangelogService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            changelog_service: Arc::clone(&self.changelog_service),
        }
    }
}

impl<S> AppState<S>
where
    S: NotificationSink + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(changelog_service: ChangelogService<S>) -> Self {
        Self {
            changelog_service: Arc::new(changelog_service),
        }
    }
}
