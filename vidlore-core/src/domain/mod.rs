//! Core domain types
//!
//! Wire-shaped entities as the extractor backend serves them. Field names
//! match the backend's JSON exactly; the backend owns every one of these
//! records and the client only ever observes them.

pub mod job;
pub mod tag;
pub mod video;
