//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces. There is exactly
//! one workflow here:
//! - `Watcher`: sequential poll of the tracked set, add/remove with
//!   immediate re-persist, fixed-interval refresh, shutdown flush

pub mod watcher;

pub use watcher::Watcher;
