//! # Collection Actor Runtime
//!
//! This module defines the `ResourceActor`, the task that owns one document collection.
//! It processes messages sequentially, so every operation on a single document is atomic
//! without any lock.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Target};
use crate::outcome::{DeleteOutcome, UpdateOutcome};
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of documents.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. Each collection runs in its own Tokio task and handles
/// one message at a time; collections run in parallel with each other.
///
/// The store is a `BTreeMap`, so scans return documents in id order. With
/// [`ObjectId`](crate::ObjectId) ids that is creation order.
///
/// # Usage Pattern
///
/// ```rust
/// use collection_actor::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Note { id: u32, text: String }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = String;
///     type Update = String;
///     type Filter = String;
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, text: String) -> Result<Self, Self::Error> {
///         Ok(Self { id, text })
///     }
///     fn matches(&self, filter: &String) -> bool { self.text.contains(filter.as_str()) }
///     fn on_update(&mut self, text: String) -> Result<(), Self::Error> {
///         self.text = text;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut next = 0;
///     let (actor, client) = ResourceActor::<Note>::new(10, move || { next += 1; next });
///     tokio::spawn(actor.run());
///
///     let note = client.create("hello".to_string()).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: Box<dyn FnMut() -> T::Id + Send>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id` - Mints the id for each inserted or upserted document.
    pub fn new(
        buffer_size: usize,
        next_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: Box::new(next_id),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of "techstore::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Find { filter, respond_to } => {
                    let items: Vec<T> = match &filter {
                        Some(f) => self.store.values().filter(|d| d.matches(f)).cloned().collect(),
                        None => self.store.values().cloned().collect(),
                    };
                    debug!(entity_type, ?filter, count = items.len(), "Find");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    target,
                    update,
                    upsert,
                    respond_to,
                } => {
                    debug!(entity_type, ?target, ?update, upsert, "Update");
                    let result = self.apply_update(entity_type, target, update, upsert);
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let deleted = self.store.remove(&id).is_some();
                    if deleted {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                    } else {
                        debug!(entity_type, %id, "Delete matched nothing");
                    }
                    let _ = respond_to.send(Ok(DeleteOutcome::new(deleted)));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn apply_update(
        &mut self,
        entity_type: &str,
        target: Target<T>,
        update: T::Update,
        upsert: bool,
    ) -> Result<UpdateOutcome<T::Id>, FrameworkError> {
        let key = match &target {
            Target::Id(id) => self.store.contains_key(id).then(|| id.clone()),
            Target::Filter(filter) => self
                .store
                .iter()
                .find(|(_, doc)| doc.matches(filter))
                .map(|(id, _)| id.clone()),
        };

        let found = match key {
            Some(id) => self.store.get_mut(&id).map(|doc| (id, doc)),
            None => None,
        };

        if let Some((id, doc)) = found {
            let before = doc.clone();
            if let Err(e) = doc.on_update(update) {
                *doc = before;
                warn!(entity_type, %id, error = %e, "Update failed");
                return Err(FrameworkError::EntityError(Box::new(e)));
            }
            let modified = *doc != before;
            info!(entity_type, %id, modified, "Updated");
            return Ok(UpdateOutcome::matched(modified));
        }

        if !upsert {
            debug!(entity_type, "Update matched nothing");
            return Ok(UpdateOutcome::unmatched());
        }

        let id = (self.next_id)();
        match T::from_upsert(id.clone(), update) {
            Some(doc) => {
                self.store.insert(id.clone(), doc);
                info!(entity_type, %id, size = self.store.len(), "Upserted");
                Ok(UpdateOutcome::upserted(id))
            }
            None => {
                warn!(entity_type, "Upsert not supported");
                Err(FrameworkError::UpsertUnsupported)
            }
        }
    }
}
