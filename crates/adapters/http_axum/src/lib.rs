//! # changelog-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the single **changelog route**, `POST /changelog`, which
//!   collects the whole body and hands it to the `ChangelogService`
//! - Answer every other method/path pair with `404 {"error": "Not found"}`
//! - Map application results into JSON HTTP responses
//!
//! ## Dependency rule
//! Depends on `changelog-app` (for the port and service) and
//! `changelog-domain` (for the types used in response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
