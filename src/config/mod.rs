//! Configuration module for the ig-downloader.
//!
//! This module handles:
//! - Process-wide constants and runtime settings
//! - The lenient/strict error policy
//! - Input validation

pub mod policy;
pub mod settings;
pub mod validation;

pub use policy::ErrorPolicy;
pub use settings::{
    Settings, DIR_IMAGE, DIR_VIDEO, ERR_GENERIC, ERR_INVALID_URL, ERR_SAVE_FAIL,
    METADATA_TIMEOUT, STRICT_ERRORS, USER_AGENT,
};
pub use validation::{parse_shortcode, validate_post_url};
