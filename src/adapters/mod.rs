//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (HTTP client, file I/O, stdout).
//!
//! Adapter categories:
//! - `api`: Steam GetServerList REST client and directory lookups
//! - `persistence`: JSON cache file for the credential + watch list
//! - `console`: stdout report sink

pub mod api;
pub mod console;
pub mod persistence;
