//! # changelog-adapter-console
//!
//! Human-readable console output for the changelog receiver.
//!
//! ## Responsibilities
//! - Implement the `NotificationSink` port: bordered blocks on stdout for
//!   accepted notifications, two error lines on stderr for rejections
//! - Render the one-time startup banner
//!
//! Every block is rendered to a `String` first and written with a single
//! call, so concurrent requests never interleave inside a block.
//!
//! ## Dependency rule
//! Depends on `changelog-app` (for the port) and `changelog-domain`.

pub mod banner;
pub mod render;
pub mod sink;

pub use banner::{print_banner, render_banner};
pub use sink::ConsoleSink;
