//! # autoclearskies-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API:
//!   - `GET  /measurements`        — list every reading, newest first
//!   - `POST /measurements/record` — store a reading, echo the stored row
//! - Serve liveness (`/health`) and database readiness (`/health/db`) checks
//! - Decode and encode JSON at the boundary, rejecting malformed bodies
//! - Map application errors onto status codes with a JSON error body
//!
//! ## Dependency rule
//! Depends on `autoclearskies-app` (for port traits and services) and
//! `autoclearskies-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
