//! Defines the HTTP routes for health metric access.
//!
//! These routes map metric recording, history, and bulk-delete paths to
//! their handler functions. They are merged into the main Axum router at
//! startup.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{add_health_metric, delete_health_metric_for_user, find_health_metric_history};
use crate::api::AppState;

pub async fn metric_router() -> Router<AppState> {
    Router::new()
        .route("/metric", post(add_health_metric))
        .route(
            "/metric/:username",
            get(find_health_metric_history).delete(delete_health_metric_for_user),
        )
}
