//! Axum router assembly.

use axum::Router;
use axum::extract::State;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use autoclearskies_app::ports::MeasurementRepository;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the measurement API with the health checks.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<MR>(state: AppState<MR>) -> Router
where
    MR: MeasurementRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/health/db", get(database_check::<MR>))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn database_check<MR>(State(state): State<AppState<MR>>) -> Result<&'static str, ApiError>
where
    MR: MeasurementRepository + Send + Sync + 'static,
{
    state.measurement_service.check_storage().await?;
    Ok("OK")
}
