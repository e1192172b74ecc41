//! Notification sink port — where handled notifications are reported.

use changelog_domain::notification::{Notification, Rejection};

/// Receives every notification the service handles, accepted or not.
///
/// Implementations must not fail the request: reporting is best-effort.
pub trait NotificationSink {
    /// Report a payload that decoded successfully.
    fn accepted(&self, notification: &Notification);

    /// Report a body that was not valid JSON.
    fn rejected(&self, rejection: &Rejection);
}

impl<T: NotificationSink + ?Sized> NotificationSink for std::sync::Arc<T> {
    fn accepted(&self, notification: &Notification) {
        (**self).accepted(notification);
    }

    fn rejected(&self, rejection: &Rejection) {
        (**self).rejected(rejection);
    }
}
