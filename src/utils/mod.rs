//! Utility modules for Seed Images
//!
//! - `files`: directory setup and file writes
//! - `http`: HTTP client utilities

pub mod files;
pub mod http;
