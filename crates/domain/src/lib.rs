//! # autoclearskies-domain
//!
//! Pure domain model for the autoclearskies measurement service.
//!
//! ## Responsibilities
//! - Define the **Measurement** (three integer sensor readings plus the
//!   timestamp the database assigned when the row was inserted)
//! - Define the **NewMeasurement** input payload
//! - Define the error taxonomy shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod measurement;
