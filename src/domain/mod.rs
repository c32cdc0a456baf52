//! Domain layer - pure status logic and models.
//!
//! Everything here is derivable from a directory entry and testable
//! in isolation. No external dependencies beyond serde/chrono.

pub mod report;
pub mod status;
pub mod watchlist;

// Re-export core types for convenience
pub use report::StatusReport;
pub use status::{NOT_FOUND_TEXT, OnlineStatus, ServerSnapshot, ServerStatus};
pub use watchlist::WatchList;
