//! Steam Directory Adapter
//!
//! Implements the `ServerDirectory` port over the GetServerList web
//! API: fetch, take the first match, derive the display status.

use async_trait::async_trait;
use tracing::debug;

use super::client::DirectoryClient;
use super::types::ServerEntry;
use crate::domain::status::{OnlineStatus, ServerSnapshot, ServerStatus};
use crate::ports::directory::{PollError, ServerDirectory};

/// Directory lookups authenticated by API key.
pub struct SteamDirectory {
    client: DirectoryClient,
    api_key: String,
}

impl SteamDirectory {
    /// Create a new directory adapter over an existing client.
    pub fn new(client: DirectoryClient, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    fn entry_to_status(entry: &ServerEntry) -> ServerStatus {
        let snapshot = ServerSnapshot {
            name: entry.name.clone(),
            players: entry.players,
            max_players: entry.max_players,
            map: entry.map.clone(),
        };
        ServerStatus::Online(OnlineStatus::from_snapshot(&snapshot))
    }
}

#[async_trait]
impl ServerDirectory for SteamDirectory {
    async fn fetch_status(&self, address: &str) -> Result<ServerStatus, PollError> {
        let list = self.client.get_server_list(&self.api_key, address).await?;

        // The filter is exact, but the directory may still return
        // several entries; the first wins.
        match list.response.servers.first() {
            Some(entry) => {
                debug!(address, name = %entry.name, "Directory match");
                Ok(Self::entry_to_status(entry))
            }
            None => {
                debug!(address, "No directory match");
                Ok(ServerStatus::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_derives_online_status() {
        let entry = ServerEntry {
            name: "Alpha".to_string(),
            players: 12,
            max_players: 10,
            map: "de_dust_2".to_string(),
        };
        match SteamDirectory::entry_to_status(&entry) {
            ServerStatus::Online(s) => {
                assert_eq!(s.name, "Alpha");
                assert_eq!(s.queued, 2);
                assert_eq!(s.map_label, "Map: de 2 dust");
            }
            ServerStatus::NotFound => panic!("expected online status"),
        }
    }
}
