//! Persistence Adapter - JSON Cache File
//!
//! Implements the `CacheStore` port with a single JSON document on
//! local disk and atomic whole-record overwrites.

pub mod cache;

pub use cache::CacheFile;
