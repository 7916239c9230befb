//! Handler functions for the health metric API endpoints.
//!
//! These functions process requests for metric data, hand the authenticated
//! principal to `services::health_metric`, and format the outcome as a
//! response.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::AppState;
use crate::auth::models::Principal;
use crate::database::models::HealthMetric;
use crate::errors::ServiceError;

pub async fn add_health_metric(
    State(state): State<AppState>,
    principal: Principal,
    Json(metric): Json<HealthMetric>,
) -> Result<StatusCode, ServiceError> {
    state
        .metric_service
        .add_health_metric(&principal, metric)
        .await?;
    Ok(StatusCode::OK)
}

pub async fn find_health_metric_history(
    State(state): State<AppState>,
    principal: Principal,
    Path(username): Path<String>,
) -> Result<Json<Vec<HealthMetric>>, ServiceError> {
    let history = state
        .metric_service
        .find_health_metric_history(&principal, &username)
        .await?;
    Ok(Json(history))
}

pub async fn delete_health_metric_for_user(
    State(state): State<AppState>,
    principal: Principal,
    Path(username): Path<String>,
) -> Result<StatusCode, ServiceError> {
    state
        .metric_service
        .delete_health_metric_for_user(&principal, &username)
        .await?;
    Ok(StatusCode::OK)
}
