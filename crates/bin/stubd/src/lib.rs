//! # changelog-stubd — changelog stub daemon
//!
//! Composition root that wires the adapters together and serves.
//!
//! ## Responsibilities
//! - Read configuration from the environment (`PORT`, `HOST`, `RUST_LOG`)
//! - Initialise `tracing` (diagnostics go to stderr; stdout carries the
//!   banner and notification blocks)
//! - Construct the console sink and the changelog service
//! - Build the axum router, bind the TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

pub mod config;
pub mod server;
pub mod telemetry;
