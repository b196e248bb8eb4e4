//! Storage port — repository trait for measurement persistence.

use std::future::Future;

use autoclearskies_domain::error::AutoClearSkiesError;
use autoclearskies_domain::measurement::{Measurement, NewMeasurement};

/// Append-only repository for [`Measurement`]s.
///
/// Rows are never updated or deleted through this port.
pub trait MeasurementRepository {
    /// Insert a new row and return it as stored, including the timestamp
    /// assigned by the backing store.
    fn record(
        &self,
        measurement: NewMeasurement,
    ) -> impl Future<Output = Result<Measurement, AutoClearSkiesError>> + Send;

    /// Return every stored row, most recent first.
    fn list(&self) -> impl Future<Output = Result<Vec<Measurement>, AutoClearSkiesError>> + Send;

    /// Check that the backing store is reachable.
    fn ping(&self) -> impl Future<Output = Result<(), AutoClearSkiesError>> + Send;
}
