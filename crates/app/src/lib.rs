//! # changelog-app
//!
//! Application layer — the receive use-case and its **port** (trait).
//!
//! ## Responsibilities
//! - Define the `NotificationSink` port that output adapters implement
//! - Provide `ChangelogService`: stamp a body, decode it, hand the result
//!   to the sink and produce the acknowledgment
//!
//! ## Dependency rule
//! Depends on `changelog-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
