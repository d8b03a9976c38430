//! # Generic Messages
//!
//! The request type sent from a `ResourceClient` to its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::outcome::{DeleteOutcome, UpdateOutcome};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Selects the document an update applies to.
///
/// A `Filter` target updates the first matching document in collection order.
#[derive(Debug)]
pub enum Target<T: ActorEntity> {
    Id(T::Id),
    Filter(T::Filter),
}

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the operations a document collection offers: insert one,
/// point lookup, scan with an optional filter, update one (optionally upserting) and
/// delete one. Each carries a oneshot sender for the reply.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Find {
        filter: Option<T::Filter>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        target: Target<T>,
        update: T::Update,
        upsert: bool,
        respond_to: Response<UpdateOutcome<T::Id>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<DeleteOutcome>,
    },
}
