//! # Order Client
//!
//! The order lifecycle API. Wraps a `ResourceClient<Order>`; every id-taking operation
//! parses the id first and fails with [`OrderError::MalformedId`] without touching the store.
use crate::model::{Order, OrderCreate, OrderFilter, OrderUpdate, PaymentRecord};
use crate::order_actor::OrderError;
use collection_actor::{
    ActorClient, DeleteOutcome, FrameworkError, ObjectId, ResourceClient, UpdateOutcome,
};
use tracing::{debug, info, instrument};

/// Client for the orders collection.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Stores the payload as a new `Pending` order and returns it with its id.
    ///
    /// There is no deduplication: submitting the same payload twice creates two orders.
    #[instrument(skip(self, params))]
    pub async fn create(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create called");
        let order = self.inner.create(params).await?;
        info!(order_id = %order.id, email = ?order.email, "Order placed");
        Ok(order)
    }

    /// Orders whose `email` equals `email` exactly, oldest first.
    #[instrument(skip(self))]
    pub async fn list_by_email(&self, email: &str) -> Result<Vec<Order>, OrderError> {
        let filter = OrderFilter::Email(email.to_string());
        Ok(self.inner.find(Some(filter)).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Order>, OrderError> {
        self.fetch_all().await
    }

    /// Point lookup that treats absence as `None`.
    #[instrument(skip(self))]
    pub async fn find(&self, id: &str) -> Result<Option<Order>, OrderError> {
        let id: ObjectId = id.parse()?;
        self.fetch(id).await
    }

    /// Point lookup that treats absence as [`OrderError::NotFound`].
    pub async fn get(&self, id: &str) -> Result<Order, OrderError> {
        self.find(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Removes the order whatever its state. A missing id reports `deleted_count == 0`.
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: &str) -> Result<DeleteOutcome, OrderError> {
        let id: ObjectId = id.parse()?;
        let outcome = self.remove(id).await?;
        info!(order_id = %id, deleted = outcome.deleted_count, "Order cancelled");
        Ok(outcome)
    }

    /// Sets `status` to `Shipped`. Shipping an already shipped order reports
    /// `modified_count == 0`; shipping a missing order reports `matched_count == 0`.
    #[instrument(skip(self))]
    pub async fn mark_shipped(&self, id: &str) -> Result<UpdateOutcome<ObjectId>, OrderError> {
        let id: ObjectId = id.parse()?;
        Ok(self.inner.update_by_id(id, OrderUpdate::MarkShipped).await?)
    }

    /// Records the payment confirmation, replacing any earlier one.
    #[instrument(skip(self, record))]
    pub async fn attach_payment(
        &self,
        id: &str,
        record: PaymentRecord,
    ) -> Result<UpdateOutcome<ObjectId>, OrderError> {
        let id: ObjectId = id.parse()?;
        debug!(?record, "attach_payment called");
        Ok(self
            .inner
            .update_by_id(id, OrderUpdate::AttachPayment(record))
            .await?)
    }
}

impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
