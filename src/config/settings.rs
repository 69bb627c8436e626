//! Process-wide constants and the runtime settings built from them.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::policy::ErrorPolicy;

/// Generic message shown for absorbed fetch and download failures.
pub const ERR_GENERIC: &str = "Something went wrong!";

/// Message shown when the output file cannot be written.
pub const ERR_SAVE_FAIL: &str = "Failed to save file!";

/// Message shown for a missing or empty URL argument.
pub const ERR_INVALID_URL: &str = "Invalid URL";

/// Switches non-fatal errors from "log and continue" to "log and abort".
pub const STRICT_ERRORS: bool = false;

/// Output directory for video posts.
pub const DIR_VIDEO: &str = "videos";

/// Output directory for image posts.
pub const DIR_IMAGE: &str = "images";

/// Upper bound for the whole metadata request.
pub const METADATA_TIMEOUT: Duration = Duration::from_secs(10);

/// Identifying user agent sent with the metadata request.
pub const USER_AGENT: &str = concat!("ig-downloader-bot/", env!("CARGO_PKG_VERSION"));

/// Runtime settings for a single invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory the `videos/` and `images/` folders are created in.
    pub output_root: PathBuf,

    /// Timeout applied to the metadata request.
    pub metadata_timeout: Duration,

    /// User agent sent with the metadata request.
    pub user_agent: String,

    /// How non-fatal errors are handled.
    pub policy: ErrorPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            metadata_timeout: METADATA_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
            policy: ErrorPolicy::from_strict_flag(STRICT_ERRORS),
        }
    }
}
