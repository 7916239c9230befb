//! Defines the HTTP route for the health advice callback.

use axum::{routing::post, Router};

use super::handlers::provide_health_advice_callback;
use crate::api::AppState;

pub async fn advice_router() -> Router<AppState> {
    Router::new().route("/advice", post(provide_health_advice_callback))
}
