//! # System Lifecycle
//!
//! [`StoreSystem`] owns the four collection actors. It spawns them at startup, exposes a
//! cloneable client for each, and on shutdown closes every channel and waits for the actor
//! tasks to drain.
//!
//! ```rust,ignore
//! let system = StoreSystem::new(32);
//!
//! let order = system.order_client.create(payload).await?;
//! system.order_client.mark_shipped(&order.id.to_string()).await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! Components never reach for a global store handle. Whatever needs a collection receives
//! its client from here (see [`AppState`](crate::api::AppState)).

mod store_system;

pub use store_system::{ShutdownError, StoreSystem};
