//! Vidlore Core
//!
//! Shared types for the vidlore client toolkit.
//!
//! This crate contains:
//! - Domain types: wire-shaped entities served by the extractor backend
//!   (videos, extraction jobs, tags)
//! - DTOs: request and error bodies for the backend's HTTP+JSON API

pub mod domain;
pub mod dto;
