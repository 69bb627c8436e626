//! Download module for content downloading.
//!
//! This module provides:
//! - Post downloading (fetch, select, download)
//! - Asset file downloading

pub mod asset;
pub mod post;

pub use asset::download_asset;
pub use post::download_post;
