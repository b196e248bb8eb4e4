//! Shared application state for axum handlers.

use std::sync::Arc;

use autoclearskies_app::ports::MeasurementRepository;
use autoclearskies_app::services::measurement_service::MeasurementService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<MR> {
    /// Measurement record/list service.
    pub measurement_service: Arc<MeasurementService<MR>>,
}

impl<MR> Clone for AppState<MR> {
    fn clone(&self) -> Self {
        Self {
            measurement_service: Arc::clone(&self.measurement_service),
        }
    }
}

impl<MR> AppState<MR>
where
    MR: MeasurementRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(measurement_service: MeasurementService<MR>) -> Self {
        Self {
            measurement_service: Arc::new(measurement_service),
        }
    }
}
