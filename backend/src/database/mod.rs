//! Persistence seams for profiles and metrics.
//!
//! This module defines the store traits the services depend on, together
//! with the error type store implementations surface. The services never
//! retry a failed store call; the error aborts the call and reaches the API
//! boundary as-is. The bundled in-memory implementations live in
//! [`queries`].

pub mod models;
pub mod queries;

use async_trait::async_trait;
use thiserror::Error;

use self::models::{HealthMetric, HealthProfile};

/// Failure inside a store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence for [`HealthProfile`] records, keyed by username.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<HealthProfile>, StoreError>;
    async fn save(&self, profile: HealthProfile) -> Result<(), StoreError>;
    async fn delete(&self, profile: &HealthProfile) -> Result<(), StoreError>;
}

/// Persistence for [`HealthMetric`] records. History is ordered by
/// insertion.
#[async_trait]
pub trait MetricStore: Send + Sync {
    async fn find_history(&self, username: &str) -> Result<Vec<HealthMetric>, StoreError>;
    async fn save(&self, metric: HealthMetric) -> Result<(), StoreError>;
    async fn delete_all_for_user(&self, profile: &HealthProfile) -> Result<(), StoreError>;
}
