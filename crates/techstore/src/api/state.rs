//! Application state shared across handlers.

use crate::clients::{OrderClient, ProductClient, ReviewClient, UserClient};
use crate::lifecycle::StoreSystem;
use crate::payments::PaymentService;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    orders: OrderClient,
    users: UserClient,
    products: ProductClient,
    reviews: ReviewClient,
    payments: PaymentService,
}

impl AppState {
    /// Takes its own clones of the system's clients. The actors keep running until
    /// every `AppState` is dropped and [`StoreSystem::shutdown`] is called.
    pub fn new(system: &StoreSystem, payments: PaymentService) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                orders: system.order_client.clone(),
                users: system.user_client.clone(),
                products: system.product_client.clone(),
                reviews: system.review_client.clone(),
                payments,
            }),
        }
    }

    pub fn orders(&self) -> &OrderClient {
        &self.inner.orders
    }

    pub fn users(&self) -> &UserClient {
        &self.inner.users
    }

    pub fn products(&self) -> &ProductClient {
        &self.inner.products
    }

    pub fn reviews(&self) -> &ReviewClient {
        &self.inner.reviews
    }

    pub fn payments(&self) -> &PaymentService {
        &self.inner.payments
    }
}
