//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the API domains (health
//! profiles, health metrics, and the advice callback) and holds the shared
//! application state that wires the services to their stores.

pub mod advice;
pub mod metric;
pub mod profile;

use std::sync::Arc;

use crate::database::{MetricStore, ProfileStore};
use crate::services::health_metric::HealthMetricService;
use crate::services::health_profile::HealthProfileService;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub profile_service: Arc<HealthProfileService>,
    pub metric_service: Arc<HealthMetricService>,
}

impl AppState {
    /// Wires the services against the given stores. Both services share the
    /// profile store so metric operations can verify the owning profile.
    pub fn new(profiles: Arc<dyn ProfileStore>, metrics: Arc<dyn MetricStore>) -> Self {
        Self {
            profile_service: Arc::new(HealthProfileService::new(Arc::clone(&profiles))),
            metric_service: Arc::new(HealthMetricService::new(profiles, metrics)),
        }
    }
}
