use crate::clients::{OrderClient, ProductClient, ReviewClient, UserClient};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(String);

/// The running set of collection actors.
///
/// # Architecture
///
/// - **Order Actor**: purchases and their shipment/payment state
/// - **User Actor**: identities and the admin role
/// - **Product Actor**: the catalog
/// - **Review Actor**: customer reviews
///
/// The collections are independent: no actor holds a client for another.
pub struct StoreSystem {
    pub order_client: OrderClient,
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub review_client: ReviewClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Spawns every collection actor with a request queue of `buffer_size`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        let (order_actor, order_client) = crate::order_actor::new(buffer_size);
        let (user_actor, user_client) = crate::user_actor::new(buffer_size);
        let (product_actor, product_client) = crate::product_actor::new(buffer_size);
        let (review_actor, review_client) = crate::review_actor::new(buffer_size);

        let handles = vec![
            tokio::spawn(order_actor.run()),
            tokio::spawn(user_actor.run()),
            tokio::spawn(product_actor.run()),
            tokio::spawn(review_actor.run()),
        ];

        Self {
            order_client,
            user_client,
            product_client,
            review_client,
            handles,
        }
    }

    /// Gracefully shuts down every collection.
    ///
    /// Dropping the clients held here closes the channels once no other clone remains
    /// (callers must drop theirs first, e.g. by stopping the HTTP server). Each actor then
    /// finishes the requests already queued and exits.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.user_client);
        drop(self.product_client);
        drop(self.review_client);

        for handle in self.handles {
            // If the task panicked, this will return an Err
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(ShutdownError(format!("{e:?}")));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
