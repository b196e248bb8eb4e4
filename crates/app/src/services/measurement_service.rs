//! Measurement service — use-cases for recording and listing readings.

use autoclearskies_domain::error::AutoClearSkiesError;
use autoclearskies_domain::measurement::{Measurement, NewMeasurement};

use crate::ports::MeasurementRepository;

/// Application service for measurement persistence.
pub struct MeasurementService<R> {
    repo: R,
}

impl<R: MeasurementRepository> MeasurementService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new reading and return the persisted row.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn record_measurement(
        &self,
        measurement: NewMeasurement,
    ) -> Result<Measurement, AutoClearSkiesError> {
        let stored = self.repo.record(measurement).await?;
        tracing::info!(datetime = %stored.datetime, "measurement recorded");
        Ok(stored)
    }

    /// List all readings, most recent first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_measurements(&self) -> Result<Vec<Measurement>, AutoClearSkiesError> {
        self.repo.list().await
    }

    /// Check that the storage backend answers.
    ///
    /// # Errors
    ///
    /// Returns [`AutoClearSkiesError::Unavailable`] when the repository
    /// cannot be reached.
    pub async fn check_storage(&self) -> Result<(), AutoClearSkiesError> {
        self.repo.ping().await.map_err(|err| match err {
            AutoClearSkiesError::Storage(inner) => AutoClearSkiesError::Unavailable(inner),
            other => other,
        })
    }
}
