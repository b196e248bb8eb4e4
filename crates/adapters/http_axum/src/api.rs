//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod measurements;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

use autoclearskies_app::ports::MeasurementRepository;

use crate::state::AppState;

/// Largest request body accepted by the API, in bytes.
pub const MAX_BODY_BYTES: usize = 16 * 1024;

/// Build the measurement routes.
pub fn routes<MR>() -> Router<AppState<MR>>
where
    MR: MeasurementRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/measurements", get(measurements::list::<MR>))
        .route("/measurements/record", post(measurements::record::<MR>))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
