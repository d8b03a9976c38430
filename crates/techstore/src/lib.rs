//! # Technology Store Backend
//!
//! Orders, payments, users and a product catalog for a small online electronics shop.
//!
//! - **[model]**: document shapes ([`Order`](model::Order), [`User`](model::User), ...)
//! - **[order_actor]**, **[user_actor]**, **[product_actor]**, **[review_actor]**: one
//!   collection actor per document kind
//! - **[clients]**: typed APIs over the collections
//! - **[payments]**: payment intent issuance through Stripe
//! - **[lifecycle]**: starts and stops the collections
//! - **[api]**: the axum router
//!
//! This library exposes the core modules of the application for integration testing.

pub mod api;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod payments;
pub mod product_actor;
pub mod review_actor;
pub mod user_actor;
