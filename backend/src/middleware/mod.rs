//! General-purpose middleware for the API.
//!
//! This module contains reusable middleware components applied to the whole
//! Axum router. The services stay quiet about failures; whatever outcome a
//! request ends with is logged here, once, at the boundary.

use axum::{extract::Request, middleware::Next, response::Response};

/// Logs method, path, and response status for every handled request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        path,
        status = response.status().as_u16(),
        "handled request"
    );
    response
}
