use log::{debug, info};
use std::sync::Arc;

use crate::modules::profile::domain::{ProfileRepository, UserProfile};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub struct ProfileService {
    profile_repository: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(profile_repository: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repository }
    }

    /// Login hook: create the profile on first sign-in, otherwise return the
    /// stored one untouched
    pub async fn ensure_profile(
        &self,
        uid: &str,
        email: &str,
        display_name: Option<String>,
    ) -> AppResult<UserProfile> {
        Validator::validate_user_id(uid)?;

        if let Some(existing) = self.profile_repository.find_by_uid(uid).await? {
            debug!("Profile {} already exists", uid);
            return Ok(existing);
        }

        let profile = UserProfile::new(uid, email, display_name);
        Validator::validate_email(&profile.email)?;

        self.profile_repository.save(&profile).await?;
        info!("Created profile for {}", uid);
        Ok(profile)
    }

    pub async fn get_profile(&self, uid: &str) -> AppResult<UserProfile> {
        Validator::validate_user_id(uid)?;

        self.profile_repository
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", uid)))
    }
}
