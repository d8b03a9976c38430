//! # ActorEntity Trait
//!
//! The contract a document type must satisfy to live in a [`ResourceActor`](crate::ResourceActor)
//! collection. Associated types pin down the id, the creation and update payloads, and the
//! filter used by `Find` and filter-targeted updates, so a `ProductCreate` can never be sent
//! to the orders collection.
//!
//! Hooks are synchronous. A collection actor owns its documents outright and every hook runs
//! inside the actor's message loop, so a hook is the atomic unit of change for one document.

use std::fmt::{Debug, Display};

/// Trait that any document type must implement to be managed by `ResourceActor`.
///
/// `PartialEq` is required so the actor can tell whether an update actually changed the
/// stored document (the `modifiedCount` of an [`UpdateOutcome`](crate::UpdateOutcome)).
pub trait ActorEntity: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// The unique identifier. `Ord` gives the collection its natural iteration order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + 'static;

    /// The data required to create a new document.
    type Create: Send + Sync + Debug + 'static;

    /// The data required to update an existing document.
    type Update: Send + Sync + Debug + 'static;

    /// Predicate payload used by `Find` and by filter-targeted updates.
    type Filter: Send + Sync + Debug + 'static;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One error enum per collection rather than one per message. Clients deal with a single
    /// `OrderError`, at the cost of some variants being unreachable from some operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full document from the store-assigned id and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this document satisfies `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Apply an update in place.
    ///
    /// If this returns an error the actor restores the document to its prior state.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Build a fresh document for an upsert that matched nothing.
    ///
    /// Returning `None` (the default) means the collection does not support upserts.
    fn from_upsert(_id: Self::Id, _update: Self::Update) -> Option<Self> {
        None
    }
}
