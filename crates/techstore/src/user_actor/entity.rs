use crate::model::{Role, User, UserFilter, UserProfile, UserUpdate};
use crate::user_actor::UserError;
use collection_actor::{ActorEntity, ObjectId};

impl ActorEntity for User {
    type Id = ObjectId;
    type Create = UserProfile;
    type Update = UserUpdate;
    type Filter = UserFilter;
    type Error = UserError;

    fn from_create_params(id: ObjectId, params: UserProfile) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            email: params.email,
            role: None,
            profile: params.fields,
        })
    }

    fn matches(&self, filter: &UserFilter) -> bool {
        match filter {
            UserFilter::Email(email) => &self.email == email,
        }
    }

    fn on_update(&mut self, update: UserUpdate) -> Result<(), Self::Error> {
        match update {
            UserUpdate::Profile(profile) => {
                self.email = profile.email;
                self.profile.extend(profile.fields);
            }
            UserUpdate::GrantAdmin => self.role = Some(Role::Admin),
        }
        Ok(())
    }

    /// Sign-in for an unknown email creates the user. An admin grant never does.
    fn from_upsert(id: ObjectId, update: UserUpdate) -> Option<Self> {
        match update {
            UserUpdate::Profile(profile) => Self::from_create_params(id, profile).ok(),
            UserUpdate::GrantAdmin => None,
        }
    }
}
