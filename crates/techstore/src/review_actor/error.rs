use collection_actor::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReviewError {
    #[error("Review store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<FrameworkError> for ReviewError {
    fn from(e: FrameworkError) -> Self {
        ReviewError::StoreUnavailable(e.to_string())
    }
}
