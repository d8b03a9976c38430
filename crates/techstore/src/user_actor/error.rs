//! Error types for the User actor.

use collection_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The users collection could not be reached.
    #[error("User store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<FrameworkError> for UserError {
    fn from(e: FrameworkError) -> Self {
        UserError::StoreUnavailable(e.to_string())
    }
}
