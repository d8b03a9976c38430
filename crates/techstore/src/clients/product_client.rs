//! # Product Client
//!
//! Catalog reads and writes. Deletion is an admin operation in the storefront UI but is
//! not gated here.
use crate::model::{Product, ProductCreate};
use crate::product_actor::ProductError;
use collection_actor::{ActorClient, DeleteOutcome, FrameworkError, ObjectId, ResourceClient};
use tracing::{info, instrument};

/// Client for the products collection.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn add(&self, params: ProductCreate) -> Result<Product, ProductError> {
        let product = self.inner.create(params).await?;
        info!(product_id = %product.id, "Product added");
        Ok(product)
    }

    pub async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        self.fetch_all().await
    }

    pub async fn find(&self, id: &str) -> Result<Option<Product>, ProductError> {
        let id: ObjectId = id.parse()?;
        self.fetch(id).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<DeleteOutcome, ProductError> {
        let id: ObjectId = id.parse()?;
        self.remove(id).await
    }
}

impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}
