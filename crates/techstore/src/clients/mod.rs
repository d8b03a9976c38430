//! # Domain Clients
//!
//! Typed wrappers over each collection's `ResourceClient`. Each implements
//! [`ActorClient`](collection_actor::ActorClient) for the shared fetch/list/remove
//! operations and adds its own domain methods.

pub mod order_client;
pub mod product_client;
pub mod review_client;
pub mod user_client;

pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use review_client::ReviewClient;
pub use user_client::UserClient;
