//! JSON handlers for measurements.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};

use autoclearskies_app::ports::MeasurementRepository;
use autoclearskies_domain::measurement::{Measurement, NewMeasurement};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    /// 200 OK with a JSON array, newest first.
    Ok(Json<Vec<Measurement>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the record endpoint.
pub enum RecordResponse {
    /// 200 OK with the stored row.
    Ok(Json<Measurement>),
}

impl IntoResponse for RecordResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /measurements`
pub async fn list<MR>(State(state): State<AppState<MR>>) -> Result<ListResponse, ApiError>
where
    MR: MeasurementRepository + Send + Sync + 'static,
{
    let measurements = state.measurement_service.list_measurements().await?;
    Ok(ListResponse::Ok(Json(measurements)))
}

/// `POST /measurements/record`
pub async fn record<MR>(
    State(state): State<AppState<MR>>,
    payload: Result<Json<NewMeasurement>, JsonRejection>,
) -> Result<RecordResponse, ApiError>
where
    MR: MeasurementRepository + Send + Sync + 'static,
{
    let Json(measurement) = payload.inspect_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "rejected measurement payload");
    })?;
    let stored = state
        .measurement_service
        .record_measurement(measurement)
        .await?;
    Ok(RecordResponse::Ok(Json(stored)))
}
