//! Handler for the health advice callback endpoint.
//!
//! The advice system posts the advice it generated for our users back to
//! us. Entries are logged and acknowledged; nothing is persisted. The call
//! still requires an authenticated principal like every other endpoint.

use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::auth::models::Principal;

/// One advice entry produced by the external advice system.
#[derive(Debug, Deserialize)]
pub struct HealthAdvice {
    pub username: String,
    pub advice: String,
}

pub async fn provide_health_advice_callback(
    principal: Principal,
    Json(advice): Json<Vec<HealthAdvice>>,
) -> StatusCode {
    tracing::info!(
        caller = %principal.username,
        entries = advice.len(),
        "received health advice callback"
    );
    for entry in &advice {
        tracing::info!(username = %entry.username, advice = %entry.advice, "health advice");
    }
    StatusCode::OK
}
