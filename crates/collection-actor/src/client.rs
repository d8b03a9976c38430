//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Target};
use crate::outcome::{DeleteOutcome, UpdateOutcome};
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle for a `ResourceActor`.
///
/// Holds only the channel sender, so it is cheap to clone and share across tasks. Every
/// method fails with [`FrameworkError::ActorClosed`] once the actor has stopped, and with
/// [`FrameworkError::ActorDropped`] if the actor went away before replying.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Inserts a new document and returns it as stored.
    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Every document matching `filter` (all documents for `None`), in id order.
    pub async fn find(&self, filter: Option<T::Filter>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Find { filter, respond_to })
            .await
    }

    pub async fn update(
        &self,
        target: Target<T>,
        update: T::Update,
        upsert: bool,
    ) -> Result<UpdateOutcome<T::Id>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            target,
            update,
            upsert,
            respond_to,
        })
        .await
    }

    pub async fn update_by_id(
        &self,
        id: T::Id,
        update: T::Update,
    ) -> Result<UpdateOutcome<T::Id>, FrameworkError> {
        self.update(Target::Id(id), update, false).await
    }

    /// Updates the first document matching `filter`.
    pub async fn update_one(
        &self,
        filter: T::Filter,
        update: T::Update,
    ) -> Result<UpdateOutcome<T::Id>, FrameworkError> {
        self.update(Target::Filter(filter), update, false).await
    }

    /// Updates the first document matching `filter`, inserting one when nothing matches.
    pub async fn upsert_one(
        &self,
        filter: T::Filter,
        update: T::Update,
    ) -> Result<UpdateOutcome<T::Id>, FrameworkError> {
        self.update(Target::Filter(filter), update, true).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<DeleteOutcome, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }
}
