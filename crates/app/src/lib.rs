//! # autoclearskies-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the storage adapter implements:
//!   - `MeasurementRepository` — append & list measurements
//! - Define the **driving** use-case struct:
//!   - `MeasurementService` — record, list, storage readiness
//!
//! ## Dependency rule
//! Depends on `autoclearskies-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
