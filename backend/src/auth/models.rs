//! Data structures for the authenticated request identity.
//!
//! The identity gateway in front of this service verifies credentials and
//! hands the backend a username plus the set of granted roles. That pair is
//! modelled here as [`Principal`]: one instance per request, immutable for
//! the duration of the request.

use std::collections::HashSet;

/// Role granting administrative read and delete access to any user's data.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// The authenticated identity a request is acting as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub roles: HashSet<String>,
}

impl Principal {
    pub fn new<I, R>(username: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            username: username.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_role_matches_granted_roles_only() {
        let principal = Principal::new("admin", [ROLE_ADMIN]);
        assert!(principal.has_role(ROLE_ADMIN));
        assert!(!principal.has_role("ROLE_USER"));
    }
}
