//! [`NotificationSink`] implementation writing to the console.

use std::io::{self, Stderr, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use changelog_app::ports::NotificationSink;
use changelog_domain::notification::{Notification, Rejection};

use crate::render::{render_notification, render_rejection};

/// Writes accepted notifications to `out` and rejections to `err`.
///
/// Generic over the writers so tests can capture output in memory;
/// production code uses [`ConsoleSink::stdio`].
pub struct ConsoleSink<O, E> {
    out: Mutex<O>,
    err: Mutex<E>,
}

impl ConsoleSink<Stdout, Stderr> {
    /// Sink bound to the process stdout and stderr.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleSink<O, E> {
    /// Create a sink over arbitrary writers.
    pub fn new(out: O, err: E) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    /// Consume the sink and return its writers.
    pub fn into_inner(self) -> (O, E) {
        (
            self.out.into_inner().unwrap_or_else(PoisonError::into_inner),
            self.err.into_inner().unwrap_or_else(PoisonError::into_inner),
        )
    }
}

fn write_block<W: Write>(writer: &Mutex<W>, block: &str) -> io::Result<()> {
    let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
    writer.write_all(block.as_bytes())?;
    writer.flush()
}

impl<O: Write, E: Write> NotificationSink for ConsoleSink<O, E> {
    fn accepted(&self, notification: &Notification) {
        if let Err(err) = write_block(&self.out, &render_notification(notification)) {
            tracing::warn!(error = %err, "failed to print notification");
        }
    }

    fn rejected(&self, rejection: &Rejection) {
        if let Err(err) = write_block(&self.err, &render_rejection(rejection)) {
            tracing::warn!(error = %err, "failed to print rejection");
        }
    }
}
