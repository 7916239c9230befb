//! Core business logic for managing health profiles.
//!
//! Every operation receives the calling principal and consults the
//! authorization policy before touching stored data. Keeping that order
//! strict means a caller who is neither owner nor admin cannot probe for
//! profile existence through error responses.

use std::sync::Arc;

use crate::auth::models::Principal;
use crate::auth::policy;
use crate::database::models::HealthProfile;
use crate::database::ProfileStore;
use crate::errors::ServiceError;

pub struct HealthProfileService {
    profiles: Arc<dyn ProfileStore>,
}

impl HealthProfileService {
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self { profiles }
    }

    /// Registers a profile for the calling user. Profiles are strictly
    /// self-registered; there is no admin override for creation.
    pub async fn add_health_profile(
        &self,
        principal: &Principal,
        profile: HealthProfile,
    ) -> Result<(), ServiceError> {
        if !policy::can_act_as_owner(principal, &profile.username) {
            return Err(ServiceError::Forbidden);
        }
        if self
            .profiles
            .find_by_username(&profile.username)
            .await?
            .is_some()
        {
            return Err(ServiceError::ProfileAlreadyExists(profile.username));
        }
        self.profiles.save(profile).await?;
        Ok(())
    }

    /// Returns the stored profile for `username`. Readable by its owner or
    /// by an admin.
    pub async fn find_health_profile(
        &self,
        principal: &Principal,
        username: &str,
    ) -> Result<HealthProfile, ServiceError> {
        if !policy::can_view_user_data(principal, username) {
            return Err(ServiceError::Forbidden);
        }
        self.profiles
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::ProfileNotFound(username.to_string()))
    }

    /// Removes the stored profile for `username`. Admin-only; owners cannot
    /// delete their own profile.
    pub async fn delete_health_profile(
        &self,
        principal: &Principal,
        username: &str,
    ) -> Result<(), ServiceError> {
        if !policy::is_admin(principal) {
            return Err(ServiceError::Forbidden);
        }
        let profile = self
            .profiles
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::ProfileNotFound(username.to_string()))?;
        self.profiles.delete(&profile).await?;
        Ok(())
    }
}
