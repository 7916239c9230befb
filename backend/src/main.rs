//! Main entry point for the HealthTrack backend.
//!
//! This file initializes the Axum web server, wires the stores into the
//! profile and metric services, and registers all API routes and
//! middleware. It orchestrates the application's startup and defines its
//! overall structure.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod middleware;
mod services;

use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Router};
use tracing_subscriber::EnvFilter;

use api::AppState;
use config::Config;
use database::queries::{InMemoryMetricStore, InMemoryProfileStore};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let state = AppState::new(
        Arc::new(InMemoryProfileStore::new()),
        Arc::new(InMemoryMetricStore::new()),
    );

    let app = Router::new()
        .route("/", get(root_handler))
        .merge(api::profile::routes::profile_router().await)
        .merge(api::metric::routes::metric_router().await)
        .merge(api::advice::routes::advice_router().await)
        .layer(from_fn(middleware::log_requests))
        .with_state(state);

    tracing::info!("listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.unwrap();
}

async fn root_handler() -> &'static str {
    "Welcome to HealthTrack!"
}
