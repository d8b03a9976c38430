//! # Review Client
use crate::model::{Review, ReviewCreate};
use crate::review_actor::ReviewError;
use collection_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for the reviews collection.
#[derive(Clone)]
pub struct ReviewClient {
    inner: ResourceClient<Review>,
}

impl ReviewClient {
    pub fn new(inner: ResourceClient<Review>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn add(&self, params: ReviewCreate) -> Result<Review, ReviewError> {
        debug!(?params, "add called");
        Ok(self.inner.create(params).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Review>, ReviewError> {
        self.fetch_all().await
    }
}

impl ActorClient<Review> for ReviewClient {
    type Error = ReviewError;

    fn inner(&self) -> &ResourceClient<Review> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ReviewError::from(e)
    }
}
