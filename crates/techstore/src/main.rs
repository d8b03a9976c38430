//! # Technology Store Server
//!
//! Starts the collection actors, wires the Stripe-backed payment service into the HTTP
//! router and serves until Ctrl+C or SIGTERM. On shutdown the server stops accepting
//! requests first, then every collection drains its queue.
//!
//! Configuration comes from the environment (see [`techstore::config`]).

use std::sync::Arc;

use anyhow::Context;
use collection_actor::tracing::setup_tracing;
use techstore::api::{self, AppState};
use techstore::config::AppConfig;
use techstore::lifecycle::StoreSystem;
use techstore::payments::{PaymentService, StripeProcessor};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    info!(?config, "Configuration loaded");

    let system = StoreSystem::new(config.actor_buffer);

    let processor = StripeProcessor::new(config.stripe_secret.clone(), &config.stripe_api_base);
    let payments = PaymentService::new(Arc::new(processor));
    let app = api::router(AppState::new(&system, payments));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Technology store listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    system.shutdown().await?;
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
