//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`, falling back to `info` when the variable is unset.
//!
//! Collection actors log their lifecycle and every write with structured fields:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO Created entity_type="Order" id=6650a1c2e4b0f3a9d1000001 size=1
//! INFO Updated entity_type="Order" id=6650a1c2e4b0f3a9d1000001 modified=true
//! INFO Deleted entity_type="Order" id=6650a1c2e4b0f3a9d1000001 size=0
//! ```
//!
//! Run with `RUST_LOG=debug` to also see payloads, filters and point lookups.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
