//! Cache Store Port - Credential and Watch List Persistence
//!
//! Defines the persisted record, its wire shape, and the trait for
//! whole-record load/save against local storage.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::watchlist::WatchList;

/// The persisted record.
///
/// Wire shape: `{"api_key": string|null, "server_ips": [string, ...]}`.
/// The whole record is rewritten on every mutation of the tracked set
/// and once more at shutdown; there is no partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// The API key, absent on first run.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Tracked addresses.
    #[serde(default)]
    pub server_ips: WatchList,
}

/// Why a load or save against the cache file failed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read.
    #[error("failed to read cache file: {0}")]
    ReadFailed(#[source] std::io::Error),
    /// The file content is not a valid record.
    #[error("cache file is not a valid record: {0}")]
    ParseFailed(#[source] serde_json::Error),
    /// The record could not be written out.
    #[error("failed to write cache file: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Trait for cache persistence providers.
#[async_trait]
pub trait CacheStore: Send + Sync + 'static {
    /// Load the record. A missing file is a fresh start, not an
    /// error: the empty record comes back.
    async fn load(&self) -> Result<CacheRecord, StoreError>;

    /// Overwrite the record on disk.
    async fn save(&self, record: &CacheRecord) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_shape() {
        let record = CacheRecord {
            api_key: Some("KEY123".to_string()),
            server_ips: ["1.2.3.4:27015".to_string()].into_iter().collect(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"api_key":"KEY123","server_ips":["1.2.3.4:27015"]}"#
        );
    }

    #[test]
    fn test_record_tolerates_missing_fields() {
        let record: CacheRecord = serde_json::from_str("{}").unwrap();
        assert!(record.api_key.is_none());
        assert!(record.server_ips.is_empty());
    }
}
