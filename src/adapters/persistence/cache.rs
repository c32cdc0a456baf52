//! Cache File - Atomic JSON Record Persistence
//!
//! Saves the `{api_key, server_ips}` record to a single JSON file
//! using atomic writes (write to tmp file, then rename), so the file
//! on disk is always either the previous record or the new one,
//! never a partial write.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use crate::ports::store::{CacheRecord, CacheStore, StoreError};

/// JSON cache file store.
pub struct CacheFile {
    /// Path to the cache file.
    path: PathBuf,
    /// Temporary path for atomic writes.
    tmp_path: PathBuf,
}

impl CacheFile {
    /// Create a store at `path`. The file itself is created on the
    /// first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        Self {
            path,
            tmp_path: PathBuf::from(tmp),
        }
    }
}

#[async_trait]
impl CacheStore for CacheFile {
    async fn load(&self) -> Result<CacheRecord, StoreError> {
        match fs::read_to_string(&self.path).await {
            Ok(json) => {
                let record: CacheRecord =
                    serde_json::from_str(&json).map_err(StoreError::ParseFailed)?;
                debug!(
                    path = %self.path.display(),
                    tracked = record.server_ips.len(),
                    "Cache loaded"
                );
                Ok(record)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No cache file, starting fresh");
                Ok(CacheRecord::default())
            }
            Err(e) => Err(StoreError::ReadFailed(e)),
        }
    }

    async fn save(&self, record: &CacheRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| StoreError::WriteFailed(std::io::Error::other(e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(StoreError::WriteFailed)?;
            }
        }

        // Write to tmp file, then atomic rename
        fs::write(&self.tmp_path, &json)
            .await
            .map_err(StoreError::WriteFailed)?;
        fs::rename(&self.tmp_path, &self.path)
            .await
            .map_err(StoreError::WriteFailed)?;

        debug!(
            path = %self.path.display(),
            tracked = record.server_ips.len(),
            "Cache saved"
        );

        Ok(())
    }
}
