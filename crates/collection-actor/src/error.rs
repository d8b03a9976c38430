//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Entity-specific failures travel inside
//! `EntityError`; domain clients map these onto their own error enums.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Collection does not support upserts")]
    UpsertUnsupported,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// True when the actor is gone and the request never ran (or its reply was lost).
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::ActorClosed | Self::ActorDropped)
    }
}
