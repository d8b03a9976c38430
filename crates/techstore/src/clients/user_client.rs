//! # User Client
//!
//! Identity records and the admin role. [`UserClient::is_admin`] is the authorization
//! check; [`UserClient::grant_admin`] is the only writer of `role`.
use crate::model::{User, UserFilter, UserProfile, UserUpdate};
use crate::user_actor::UserError;
use collection_actor::{ActorClient, FrameworkError, ObjectId, ResourceClient, UpdateOutcome};
use tracing::{debug, info, instrument, warn};

/// Client for the users collection.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Inserts a new user record. Does not check for an existing record with the same email.
    #[instrument(skip(self, profile), fields(email = %profile.email))]
    pub async fn register(&self, profile: UserProfile) -> Result<User, UserError> {
        let user = self.inner.create(profile).await?;
        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Sign-in write: overwrites the supplied profile fields of the user with this email,
    /// creating the user if none exists. Never touches `role`.
    #[instrument(skip(self, profile), fields(email = %profile.email))]
    pub async fn upsert_profile(
        &self,
        profile: UserProfile,
    ) -> Result<UpdateOutcome<ObjectId>, UserError> {
        debug!(?profile, "upsert_profile called");
        let filter = UserFilter::Email(profile.email.clone());
        Ok(self
            .inner
            .upsert_one(filter, UserUpdate::Profile(profile))
            .await?)
    }

    /// First user with this email, if any.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self
            .inner
            .find(Some(UserFilter::Email(email.to_string())))
            .await?;
        Ok(users.into_iter().next())
    }

    /// Whether the user with this email holds the admin role. Unknown emails are not admins.
    pub async fn is_admin(&self, email: &str) -> Result<bool, UserError> {
        Ok(self
            .find_by_email(email)
            .await?
            .is_some_and(|user| user.is_admin()))
    }

    /// Sets `role = admin` on the first user with this email.
    ///
    /// The caller's own role is not checked, so any client can elevate any account. A
    /// missing user is reported as `matched_count == 0`, not as an error.
    #[instrument(skip(self))]
    pub async fn grant_admin(&self, email: &str) -> Result<UpdateOutcome<ObjectId>, UserError> {
        let outcome = self
            .inner
            .update_one(UserFilter::Email(email.to_string()), UserUpdate::GrantAdmin)
            .await?;
        if outcome.matched_count == 0 {
            warn!("Admin grant matched no user");
        } else {
            info!(modified = outcome.modified_count, "Admin role granted");
        }
        Ok(outcome)
    }
}

impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from(e)
    }
}
