//! Text rendering of notifications and rejections.

use changelog_domain::notification::{Notification, Rejection};
use changelog_domain::time::format_iso8601;

/// Width of the `=` separator around notification blocks.
pub const SEPARATOR_WIDTH: usize = 80;

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Render the stdout block for an accepted notification.
///
/// Starts with a blank line and ends with one, so consecutive blocks are
/// visually separated.
#[must_use]
pub fn render_notification(notification: &Notification) -> String {
    let sep = separator();
    format!(
        "\n{sep}\n[{ts}] Change notification received\n{sep}\n{payload}\n{sep}\n\n",
        ts = format_iso8601(&notification.timestamp),
        payload = notification.pretty_payload(),
    )
}

/// Render the stderr lines for a rejected body.
#[must_use]
pub fn render_rejection(rejection: &Rejection) -> String {
    format!(
        "[{ts}] ERROR: Invalid JSON received\nBody: {body}\n",
        ts = format_iso8601(&rejection.timestamp),
        body = rejection.raw_body,
    )
}
