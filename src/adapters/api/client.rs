//! Directory HTTP Client
//!
//! Wraps reqwest for the GetServerList endpoint. One GET per poll,
//! no retries: a failed attempt is reported as-is and the next
//! refresh tick tries again.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use super::types::GetServerListResponse;
use crate::ports::directory::PollError;

/// Steam's public game-server directory.
pub const SERVER_LIST_ENDPOINT: &str =
    "https://api.steampowered.com/IGameServersService/GetServerList/v1/";

/// Configuration for the directory client.
#[derive(Debug, Clone)]
pub struct DirectoryClientConfig {
    /// Endpoint URL for the server-list query.
    pub endpoint: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for DirectoryClientConfig {
    fn default() -> Self {
        Self {
            endpoint: SERVER_LIST_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the game-server directory.
pub struct DirectoryClient {
    /// Underlying HTTP client.
    http: Client,
    /// Endpoint URL.
    endpoint: String,
}

impl DirectoryClient {
    /// Create a new directory client.
    pub fn new(config: DirectoryClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: config.endpoint,
        })
    }

    /// Query the directory for servers matching one address.
    ///
    /// Sends `?key=<credential>&filter=addr\<address>` (a single
    /// literal backslash in the filter) and decodes the JSON
    /// envelope. Exactly one attempt.
    pub async fn get_server_list(
        &self,
        api_key: &str,
        address: &str,
    ) -> Result<GetServerListResponse, PollError> {
        let filter = format!("addr\\{address}");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("key", api_key), ("filter", filter.as_str())])
            .send()
            .await
            .map_err(|e| PollError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::RequestFailed(format!("HTTP {status}")));
        }

        let list = response
            .json::<GetServerListResponse>()
            .await
            .map_err(|e| PollError::ParseFailed(e.to_string()))?;

        debug!(
            address,
            matches = list.response.servers.len(),
            "Server list fetched"
        );

        Ok(list)
    }
}
