//! Data transfer objects for the backend's HTTP+JSON API
//!
//! Request bodies for the mutating endpoints, plus the error body the
//! backend attaches to non-2xx responses. Field names are the wire names.

pub mod error;
pub mod job;
pub mod tag;
pub mod video;
