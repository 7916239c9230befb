//! Handler functions for the health profile API endpoints.
//!
//! These functions adapt HTTP requests into service calls: they take the
//! authenticated principal off the request, pass it to
//! `services::health_profile`, and let the typed service outcome drive the
//! response.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::AppState;
use crate::auth::models::Principal;
use crate::database::models::HealthProfile;
use crate::errors::ServiceError;

pub async fn add_health_profile(
    State(state): State<AppState>,
    principal: Principal,
    Json(profile): Json<HealthProfile>,
) -> Result<StatusCode, ServiceError> {
    state
        .profile_service
        .add_health_profile(&principal, profile)
        .await?;
    Ok(StatusCode::OK)
}

pub async fn find_health_profile(
    State(state): State<AppState>,
    principal: Principal,
    Path(username): Path<String>,
) -> Result<Json<HealthProfile>, ServiceError> {
    let profile = state
        .profile_service
        .find_health_profile(&principal, &username)
        .await?;
    Ok(Json(profile))
}

pub async fn delete_health_profile(
    State(state): State<AppState>,
    principal: Principal,
    Path(username): Path<String>,
) -> Result<StatusCode, ServiceError> {
    state
        .profile_service
        .delete_health_profile(&principal, &username)
        .await?;
    Ok(StatusCode::OK)
}
