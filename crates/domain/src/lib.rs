//! # changelog-domain
//!
//! Pure domain model for the changelog notification receiver.
//!
//! ## Responsibilities
//! - Timestamps and their ISO-8601 wire format
//! - Define **Notifications** (an accepted JSON payload and the time it arrived)
//! - Define **Rejections** (a body that failed to parse, kept verbatim)
//! - Define **Receipts** (the acknowledgment returned to the sender)
//! - The error type raised when a body is not JSON
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.

pub mod error;
pub mod notification;
pub mod time;
