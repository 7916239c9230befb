//! Extraction of the authenticated principal from incoming requests.
//!
//! Credential verification happens in the identity gateway fronting this
//! service; by the time a request arrives here the gateway has replaced any
//! client-supplied identity headers with its own verified values. This
//! module only adapts those headers into a [`Principal`] and rejects
//! requests that arrive without one.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::errors::AuthError;
use super::models::Principal;

/// Header set by the identity gateway carrying the verified username.
pub const USERNAME_HEADER: &str = "x-auth-username";
/// Header carrying the comma-separated granted roles. Absent when the user
/// was granted no roles.
pub const ROLES_HEADER: &str = "x-auth-roles";

#[async_trait]
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let username = parts
            .headers
            .get(USERNAME_HEADER)
            .ok_or(AuthError::MissingPrincipal)?
            .to_str()
            .map_err(|_| AuthError::MalformedIdentity("username is not valid UTF-8"))?
            .trim();
        if username.is_empty() {
            return Err(AuthError::MissingPrincipal);
        }

        let roles: Vec<String> = match parts.headers.get(ROLES_HEADER) {
            None => Vec::new(),
            Some(value) => value
                .to_str()
                .map_err(|_| AuthError::MalformedIdentity("roles are not valid UTF-8"))?
                .split(',')
                .map(str::trim)
                .filter(|role| !role.is_empty())
                .map(str::to_string)
                .collect(),
        };

        Ok(Principal::new(username, roles))
    }
}
