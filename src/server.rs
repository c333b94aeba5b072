//! HTTP server initialization and runtime setup.
//!
//! Builds the shared HTTP client, selects the point store, and drives the
//! Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::PointStore;
use crate::geo::{CoordinateLocator, HttpRedirectResolver};
use crate::infrastructure::airtable::{AirtableConfig, AirtableStore};
use crate::infrastructure::store::MemoryStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Shared reqwest client (Airtable calls and shortlink resolution)
/// - Airtable store, or the in-memory fallback when no token is configured
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .build()?;

    let store: Arc<dyn PointStore> = if config.is_airtable_enabled() {
        tracing::info!(
            "Store enabled (Airtable base {} table {})",
            config.airtable_base_id,
            config.airtable_table_id
        );
        Arc::new(AirtableStore::new(
            client.clone(),
            AirtableConfig::from_config(&config),
        ))
    } else {
        tracing::warn!("AIRTABLE_TOKEN not set; points are kept in memory only");
        Arc::new(MemoryStore::new())
    };

    let locator = Arc::new(CoordinateLocator::new(Arc::new(HttpRedirectResolver::new(
        client,
    ))));

    let state = AppState::new(
        store,
        locator,
        config.points_default_max,
        config.points_max_cap,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install ctrl-c handler: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
