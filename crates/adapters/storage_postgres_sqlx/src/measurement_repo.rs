//! `PostgreSQL` implementation of [`MeasurementRepository`].

use std::future::Future;

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};

use autoclearskies_app::ports::MeasurementRepository;
use autoclearskies_domain::error::AutoClearSkiesError;
use autoclearskies_domain::measurement::{Measurement, NewMeasurement};

use crate::error::StorageError;
use crate::pool::Database;

/// Wrapper for converting database rows into domain [`Measurement`].
struct Wrapper(Measurement);

impl<'r> FromRow<'r, PgRow> for Wrapper {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Measurement {
            lng: row.try_get("lng")?,
            lpg: row.try_get("lpg")?,
            co: row.try_get("co")?,
            datetime: row.try_get("datetime")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO misc_measurements (lpg, lng, co)
    VALUES ($1, $2, $3)
    RETURNING lng, lpg, co, datetime::TEXT AS datetime
";

// Sort on the timestamp column, not on its text rendering.
const SELECT_ALL: &str = r"
    SELECT lng, lpg, co, datetime::TEXT AS datetime
    FROM misc_measurements
    ORDER BY misc_measurements.datetime DESC
";

/// `PostgreSQL`-backed measurement repository.
///
/// Each operation checks a connection out of the shared pool and returns it
/// when the query future completes or is dropped.
pub struct PgMeasurementRepository {
    db: Database,
}

impl PgMeasurementRepository {
    /// Create a new repository using the given database handle.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn pool(&self) -> PgPool {
        self.db.pool().clone()
    }
}

impl MeasurementRepository for PgMeasurementRepository {
    fn record(
        &self,
        measurement: NewMeasurement,
    ) -> impl Future<Output = Result<Measurement, AutoClearSkiesError>> + Send {
        let pool = self.pool();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(measurement.lpg)
                .bind(measurement.lng)
                .bind(measurement.co)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn list(&self) -> impl Future<Output = Result<Vec<Measurement>, AutoClearSkiesError>> + Send {
        let pool = self.pool();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn ping(&self) -> impl Future<Output = Result<(), AutoClearSkiesError>> + Send {
        let db = self.db.clone();
        async move {
            db.ping().await?;
            Ok(())
        }
    }
}
