//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the domain/usecases layer
//! requires from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `ServerDirectory`: remote status lookup per tracked address
//! - `CacheStore`: credential + watch list persistence
//! - `ReportSink`: the display seam the GUI would implement

pub mod directory;
pub mod store;
pub mod view;
