//! Changelog service — the receive use-case.

use changelog_domain::error::ChangelogError;
use changelog_domain::notification::{Notification, Receipt, Rejection};
use changelog_domain::time;

use crate::ports::NotificationSink;

/// Application service turning raw request bodies into receipts.
pub struct ChangelogService<S> {
    sink: S,
}

impl<S: NotificationSink> ChangelogService<S> {
    /// Create a new service reporting to the given sink.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// The sink notifications are reported to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Handle a fully collected request body.
    ///
    /// The timestamp is taken once, here, after the body has arrived, and
    /// shared by the sink output and the returned receipt or error.
    ///
    /// # Errors
    ///
    /// Returns [`ChangelogError::InvalidJson`] if `body` is not valid JSON.
    /// The rejection has already been reported to the sink.
    #[tracing::instrument(skip(self, body), fields(body_len = body.len()))]
    pub fn receive(&self, body: &[u8]) -> Result<Receipt, ChangelogError> {
        let timestamp = time::now();
        match Notification::parse(timestamp, body) {
            Ok(notification) => {
                self.sink.accepted(&notification);
                tracing::info!("change notification accepted");
                Ok(Receipt::for_notification(&notification))
            }
            Err(err) => {
                self.sink.rejected(&Rejection::new(timestamp, body));
                tracing::warn!(error = %err, "change notification rejected");
                Err(err)
            }
        }
    }
}
