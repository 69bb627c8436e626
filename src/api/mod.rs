//! Metadata endpoint module.
//!
//! This module provides:
//! - Request URL construction from share links
//! - HTTP client for the metadata and asset requests
//! - Metadata response types

pub mod client;
pub mod types;
pub mod url;

pub use client::MediaApi;
pub use types::*;
pub use self::url::{request_url, JSON_MARKER, SHARE_MARKER};
