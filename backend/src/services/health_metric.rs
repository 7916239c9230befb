//! Core business logic for recording and querying health metrics.
//!
//! Metrics hang off a profile: recording one requires the owning profile to
//! exist, checked inside the call after authorization has passed. History
//! reads intentionally skip the profile check; an empty history is a valid
//! answer for a user who never registered.

use std::sync::Arc;

use crate::auth::models::Principal;
use crate::auth::policy;
use crate::database::models::HealthMetric;
use crate::database::{MetricStore, ProfileStore};
use crate::errors::ServiceError;

pub struct HealthMetricService {
    profiles: Arc<dyn ProfileStore>,
    metrics: Arc<dyn MetricStore>,
}

impl HealthMetricService {
    pub fn new(profiles: Arc<dyn ProfileStore>, metrics: Arc<dyn MetricStore>) -> Self {
        Self { profiles, metrics }
    }

    /// Records a metric for the calling user against their existing
    /// profile.
    pub async fn add_health_metric(
        &self,
        principal: &Principal,
        metric: HealthMetric,
    ) -> Result<(), ServiceError> {
        if !policy::can_act_as_owner(principal, &metric.username) {
            return Err(ServiceError::Forbidden);
        }
        if self
            .profiles
            .find_by_username(&metric.username)
            .await?
            .is_none()
        {
            return Err(ServiceError::ProfileNotFound(metric.username));
        }
        self.metrics.save(metric).await?;
        Ok(())
    }

    /// Returns the recorded metrics for `username` in insertion order,
    /// readable by the owner or an admin. Empty when nothing was recorded;
    /// the profile itself is not required to exist.
    pub async fn find_health_metric_history(
        &self,
        principal: &Principal,
        username: &str,
    ) -> Result<Vec<HealthMetric>, ServiceError> {
        if !policy::can_view_user_data(principal, username) {
            return Err(ServiceError::Forbidden);
        }
        Ok(self.metrics.find_history(username).await?)
    }

    /// Removes every metric recorded for `username`. Admin-only.
    pub async fn delete_health_metric_for_user(
        &self,
        principal: &Principal,
        username: &str,
    ) -> Result<(), ServiceError> {
        if !policy::is_admin(principal) {
            return Err(ServiceError::Forbidden);
        }
        let profile = self
            .profiles
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::ProfileNotFound(username.to_string()))?;
        self.metrics.delete_all_for_user(&profile).await?;
        Ok(())
    }
}
