//! Server Directory Port - Remote Status Lookup Interface
//!
//! Defines the trait for querying the game-server directory for a
//! single tracked address, and the error taxonomy for a failed poll.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::status::ServerStatus;

/// Why a poll attempt produced no status.
///
/// A well-formed response with zero matches is NOT an error; it maps
/// to [`ServerStatus::NotFound`].
#[derive(Debug, Error)]
pub enum PollError {
    /// Transport-level failure: timeout, DNS, non-2xx status.
    #[error("directory request failed: {0}")]
    RequestFailed(String),
    /// A body came back but was not the expected JSON shape.
    #[error("directory response unreadable: {0}")]
    ParseFailed(String),
}

/// Trait for directory lookup providers.
///
/// Implementors report errors faithfully; whether an error is
/// downgraded to a not-found display is the caller's policy, not the
/// port's.
#[async_trait]
pub trait ServerDirectory: Send + Sync + 'static {
    /// Fetch the status of one `host:port` address.
    ///
    /// One best-effort attempt, no retries. The address is passed
    /// through to the directory filter unvalidated.
    async fn fetch_status(&self, address: &str) -> Result<ServerStatus, PollError>;
}
