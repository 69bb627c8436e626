//! Filesystem module.
//!
//! Provides:
//! - Output path construction
//! - Directory creation

pub mod paths;

pub use paths::{ensure_dir, get_download_path};
