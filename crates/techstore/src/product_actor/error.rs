//! Error types for the Product actor.

use collection_actor::{FrameworkError, InvalidObjectId};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Malformed product id: {0}")]
    MalformedId(String),

    #[error("Product store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<InvalidObjectId> for ProductError {
    fn from(e: InvalidObjectId) -> Self {
        ProductError::MalformedId(e.0)
    }
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        ProductError::StoreUnavailable(e.to_string())
    }
}
