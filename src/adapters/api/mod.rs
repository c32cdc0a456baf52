//! Steam Web API Adapter
//!
//! HTTP client and `ServerDirectory` implementation for the
//! GetServerList directory endpoint.

pub mod client;
pub mod directory;
pub mod types;

pub use client::{DirectoryClient, DirectoryClientConfig, SERVER_LIST_ENDPOINT};
pub use directory::SteamDirectory;
