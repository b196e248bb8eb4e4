//! # autoclearskies-adapter-storage-postgres-sqlx
//!
//! `PostgreSQL` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `MeasurementRepository` port defined in `autoclearskies-app`
//! - Own the bounded connection pool and its lifecycle
//! - Map between domain types and database rows
//!
//! The `misc_measurements` table is provisioned outside this service.
//!
//! ## Dependency rule
//! Depends on `autoclearskies-app` (for port traits) and `autoclearskies-domain`
//! (for domain types). The `app` and `domain` crates must never reference this adapter.

mod error;
mod measurement_repo;
mod pool;

pub use error::StorageError;
pub use measurement_repo::PgMeasurementRepository;
pub use pool::{Config, Database};
