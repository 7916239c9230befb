//! Authorization decisions for profile and metric operations.
//!
//! Pure functions over the request principal and the target username, with
//! no store access and no side effects. The services evaluate these before
//! any existence check, so an unauthorized caller never learns whether the
//! target exists.

use super::models::{Principal, ROLE_ADMIN};

/// True iff the principal is the user the operation targets.
pub fn can_act_as_owner(principal: &Principal, target_username: &str) -> bool {
    principal.username == target_username
}

/// True iff the principal holds the administrative role.
pub fn is_admin(principal: &Principal) -> bool {
    principal.has_role(ROLE_ADMIN)
}

/// Owner-or-admin rule shared by the read paths.
pub fn can_view_user_data(principal: &Principal, target_username: &str) -> bool {
    can_act_as_owner(principal, target_username) || is_admin(principal)
}
