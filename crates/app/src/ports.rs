//! Port definitions — traits that adapters implement.

pub mod notification_sink;

pub use notification_sink::NotificationSink;
