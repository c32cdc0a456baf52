//! Watcher - The Refresh Loop
//!
//! Polls every tracked address in sequence on a fixed interval,
//! hands the results to the report sink, and re-persists the tracked
//! set after any mutation. One attempt per address per tick; a
//! failed poll is shown as not-found and retried naturally on the
//! next tick.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::domain::report::StatusReport;
use crate::domain::status::ServerStatus;
use crate::domain::watchlist::WatchList;
use crate::ports::directory::{PollError, ServerDirectory};
use crate::ports::store::{CacheRecord, CacheStore, StoreError};
use crate::ports::view::ReportSink;

/// Application context for the polling/caching/display cycle.
///
/// Owns the credential and the watch list; nothing here is global.
/// All mutation happens on this one task, each mutation followed by
/// a whole-record persist.
pub struct Watcher<D: ServerDirectory, S: CacheStore, V: ReportSink> {
    /// Directory lookups.
    directory: Arc<D>,
    /// Cache persistence.
    store: Arc<S>,
    /// Display surface.
    sink: V,
    /// The API key, fixed for the process lifetime.
    api_key: String,
    /// Tracked addresses.
    watchlist: WatchList,
    /// Time between refresh ticks.
    interval: Duration,
}

impl<D: ServerDirectory, S: CacheStore, V: ReportSink> Watcher<D, S, V> {
    pub fn new(
        directory: Arc<D>,
        store: Arc<S>,
        sink: V,
        api_key: String,
        watchlist: WatchList,
        interval: Duration,
    ) -> Self {
        Self {
            directory,
            store,
            sink,
            api_key,
            watchlist,
            interval,
        }
    }

    /// The current tracked set.
    pub fn watchlist(&self) -> &WatchList {
        &self.watchlist
    }

    /// Poll every tracked address once, in sorted order, and collect
    /// a report.
    ///
    /// Per-address failures are downgraded to not-found for display
    /// after a warning; the user sees the same line whether the
    /// server is really absent or the lookup failed in transit.
    pub async fn poll_all(&self) -> StatusReport {
        let mut entries = Vec::with_capacity(self.watchlist.len());

        for address in self.watchlist.iter() {
            let status = match self.directory.fetch_status(address).await {
                Ok(status) => status,
                Err(e) => {
                    warn!(address, error = %e, "Poll failed, showing as not found");
                    ServerStatus::NotFound
                }
            };
            entries.push((address.to_string(), status));
        }

        StatusReport::new(entries)
    }

    /// Track a new address.
    ///
    /// The directory is probed first; the address is only accepted
    /// when the probe's transport and parse succeed, even if the
    /// directory reports no match. The tracked set is re-persisted
    /// immediately after a successful add.
    pub async fn add_address(&mut self, address: &str) -> Result<ServerStatus, PollError> {
        let status = self.directory.fetch_status(address).await?;

        if self.watchlist.add(address) {
            info!(address, tracked = self.watchlist.len(), "Address added");
        }
        if let Err(e) = self.persist().await {
            warn!(error = %e, "Failed to persist watch list after add");
        }

        Ok(status)
    }

    /// Stop tracking an address. Returns whether it was tracked.
    pub async fn remove_address(&mut self, address: &str) -> bool {
        let removed = self.watchlist.remove(address);
        if removed {
            info!(address, tracked = self.watchlist.len(), "Address removed");
            if let Err(e) = self.persist().await {
                warn!(error = %e, "Failed to persist watch list after remove");
            }
        }
        removed
    }

    /// Run the refresh loop until shutdown.
    ///
    /// Renders once at startup, then on every interval tick. On
    /// shutdown the record gets one final flush, mirroring the quit
    /// path of the display.
    pub async fn run(&mut self, mut shutdown_rx: broadcast::Receiver<()>) -> Result<()> {
        info!(
            tracked = self.watchlist.len(),
            interval_s = self.interval.as_secs(),
            "Watcher started"
        );

        let mut ticker = tokio::time::interval(self.interval);
        // A slow tick delays the next one instead of bursting, same
        // as re-arming the timer after each refresh.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // The first interval tick completes immediately and doubles
        // as the initial render.
        loop {
            tokio::select! {
                biased;
                _ = shutdown_rx.recv() => {
                    info!("Watcher received shutdown signal");
                    break;
                }
                _ = ticker.tick() => {
                    let report = self.poll_all().await;
                    self.sink.present(&report);
                }
            }
        }

        self.flush().await;
        info!("Watcher stopped cleanly");
        Ok(())
    }

    /// Final persistence flush on shutdown.
    pub async fn flush(&self) {
        match self.persist().await {
            Ok(()) => info!("Cache flushed"),
            Err(e) => warn!(error = %e, "Final cache flush failed"),
        }
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let record = CacheRecord {
            api_key: Some(self.api_key.clone()),
            server_ips: self.watchlist.clone(),
        };
        self.store.save(&record).await
    }
}
