//! Defines the HTTP routes for health profile management.
//!
//! These routes map the profile paths to their handler functions. They are
//! merged into the main Axum router at startup.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{add_health_profile, delete_health_profile, find_health_profile};
use crate::api::AppState;

pub async fn profile_router() -> Router<AppState> {
    Router::new()
        .route("/profile", post(add_health_profile))
        .route(
            "/profile/:username",
            get(find_health_profile).delete(delete_health_profile),
        )
}
