//! Custom error types for requests that fail authentication.
//!
//! The core services assume an authenticated principal; requests that reach
//! the API without one are rejected here, before any service call, with a
//! structured 401 response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::errors::ErrorResponse;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No identity headers were presented; the identity gateway never saw
    /// this request or declined to vouch for it.
    #[error("missing authenticated principal")]
    MissingPrincipal,
    /// Identity headers were present but unreadable.
    #[error("malformed identity header: {0}")]
    MalformedIdentity(&'static str),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_map_to_unauthorized() {
        assert_eq!(
            AuthError::MissingPrincipal.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::MalformedIdentity("bad header")
                .into_response()
                .status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
