//! User record: the single entity this service stores.

use serde::Serialize;

use crate::entity::Entity;
use crate::id::UserId;
use crate::value_object::ValueObject;

/// The client-editable part of a user record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

impl UserProfile {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        bio: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            bio: bio.into(),
        }
    }
}

impl ValueObject for UserProfile {}

/// A stored user.
///
/// The id is fixed at construction; only the profile fields change afterwards.
/// Records are only ever serialized, never decoded from client input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

impl User {
    pub fn new(id: UserId, profile: UserProfile) -> Self {
        Self {
            id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            bio: profile.bio,
        }
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            bio: self.bio.clone(),
        }
    }

    /// Overwrite every profile field. The id is left untouched.
    pub fn apply_profile(&mut self, profile: UserProfile) {
        self.first_name = profile.first_name;
        self.last_name = profile.last_name;
        self.bio = profile.bio;
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}
