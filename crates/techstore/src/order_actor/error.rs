//! Error types for the Order actor.

use collection_actor::{FrameworkError, InvalidObjectId};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The identifier is not a valid object id. Raised before the store is touched.
    #[error("Malformed order id: {0}")]
    MalformedId(String),

    /// No order has the requested id.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The orders collection could not be reached.
    #[error("Order store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<InvalidObjectId> for OrderError {
    fn from(e: InvalidObjectId) -> Self {
        OrderError::MalformedId(e.0)
    }
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        OrderError::StoreUnavailable(e.to_string())
    }
}
