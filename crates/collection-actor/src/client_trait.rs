//! # ActorClient Trait
//!
//! Provides a common interface for collection-specific clients, adding default `fetch`,
//! `fetch_all` and `remove` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, DeleteOutcome, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the plain key-based operations.
///
/// # Example
///
/// ```rust
/// use collection_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Review { id: u32, text: String }
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct ReviewError(String);
///
/// impl ActorEntity for Review {
///     type Id = u32;
///     type Create = String;
///     type Update = String;
///     type Filter = ();
///     type Error = ReviewError;
///
///     fn from_create_params(id: u32, text: String) -> Result<Self, Self::Error> {
///         Ok(Self { id, text })
///     }
///     fn matches(&self, _: &()) -> bool { true }
///     fn on_update(&mut self, text: String) -> Result<(), Self::Error> {
///         self.text = text;
///         Ok(())
///     }
/// }
///
/// struct ReviewClient { inner: ResourceClient<Review> }
///
/// impl ActorClient<Review> for ReviewClient {
///     type Error = ReviewError;
///
///     fn inner(&self) -> &ResourceClient<Review> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         ReviewError(e.to_string())
///     }
/// }
///
/// async fn usage(client: ReviewClient) {
///     // fetch(), fetch_all() and remove() are provided automatically
///     let _ = client.fetch(1).await;
///     let _ = client.fetch_all().await;
///     let _ = client.remove(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The collection-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a document by id.
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Every document in the collection, in id order.
    #[tracing::instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(None).await.map_err(Self::map_error)
    }

    /// Delete a document by id. Deleting a missing id reports `deleted_count == 0`.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: T::Id) -> Result<DeleteOutcome, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
