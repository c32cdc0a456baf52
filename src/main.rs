//! serverwatch - Entry Point
//!
//! Wires the directory client, cache file, and console sink into the
//! watcher loop. Runs until SIGINT, then flushes the cache and exits.
//!
//! Wiring sequence:
//! 1. Load serverwatch.toml (defaults when absent) + validate
//! 2. Init tracing (env-filter)
//! 3. Load the cache record (malformed cache: warn + start empty)
//! 4. Resolve the API key (cached key, else STEAM_API_KEY)
//! 5. Create the directory client and cache store
//! 6. Spawn the watcher refresh loop
//! 7. Wait for SIGINT, then graceful shutdown with a final flush

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

mod adapters;
mod config;
mod domain;
mod ports;
mod usecases;

use adapters::api::client::{DirectoryClient, DirectoryClientConfig};
use adapters::api::directory::SteamDirectory;
use adapters::console::ConsoleSink;
use adapters::persistence::CacheFile;
use ports::store::{CacheRecord, CacheStore};
use usecases::watcher::Watcher;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::loader::load_config("serverwatch.toml")
        .context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.app.log_level)
                }),
        )
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        cache = %config.cache.path,
        interval_s = config.poll.interval_seconds,
        "Starting serverwatch"
    );

    let store = Arc::new(CacheFile::new(&config.cache.path));

    // A malformed cache is reported, not fatal; the bad file stays on
    // disk untouched until the next save replaces it.
    let record = match store.load().await {
        Ok(record) => record,
        Err(e) => {
            warn!(error = %e, "Cache unreadable, starting from an empty record");
            CacheRecord::default()
        }
    };

    let api_key = resolve_api_key(&record)?;

    let client = DirectoryClient::new(DirectoryClientConfig {
        endpoint: config.api.endpoint.clone(),
        timeout: Duration::from_secs(config.api.timeout_seconds),
    })
    .context("Failed to create directory client")?;
    let directory = Arc::new(SteamDirectory::new(client, api_key.clone()));

    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);

    let mut watcher = Watcher::new(
        directory,
        Arc::clone(&store),
        ConsoleSink,
        api_key,
        record.server_ips,
        Duration::from_secs(config.poll.interval_seconds),
    );

    let watcher_handle = tokio::spawn(async move {
        if let Err(e) = watcher.run(shutdown_rx).await {
            error!(error = %e, "Watcher failed");
        }
    });

    signal::ctrl_c().await?;
    info!("SIGINT received, initiating graceful shutdown");

    let _ = shutdown_tx.send(());
    let _ = tokio::time::timeout(Duration::from_secs(30), watcher_handle).await;

    info!("Shutdown complete");
    Ok(())
}

/// Resolve the credential: the cached key wins, then STEAM_API_KEY.
///
/// Interactive key entry is a display concern and lives with the GUI;
/// the environment variable is its non-interactive stand-in.
fn resolve_api_key(record: &CacheRecord) -> Result<String> {
    if let Some(key) = record.api_key.as_deref() {
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }
    std::env::var("STEAM_API_KEY")
        .context("No cached API key and STEAM_API_KEY is not set")
}
