use collection_actor::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Privilege level stored on a user. Absent means an ordinary user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
}

/// Identity record keyed by email.
///
/// `role` is only ever written by an admin grant. Profile writes (`register`,
/// `upsert_profile`) never carry it, so a role can be added but not removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

/// Profile fields sent by the client on sign-in or registration.
///
/// Any `role` or `_id` key in the request body is discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub email: String,
    pub fields: Map<String, Value>,
}

impl UserProfile {
    /// Splits a request body into the email key and the remaining fields.
    ///
    /// Returns `None` unless `email` is a non-empty string.
    pub fn from_body(mut body: Map<String, Value>) -> Option<Self> {
        match body.remove("email") {
            Some(Value::String(email)) if !email.is_empty() => Some(Self::new(email, body)),
            _ => None,
        }
    }

    pub fn new(email: impl Into<String>, mut fields: Map<String, Value>) -> Self {
        for reserved in ["_id", "email", "role"] {
            fields.remove(reserved);
        }
        Self {
            email: email.into(),
            fields,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserUpdate {
    /// Overwrite the supplied profile fields, leaving the others.
    Profile(UserProfile),
    GrantAdmin,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserFilter {
    Email(String),
}
