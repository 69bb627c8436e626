//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Download progress bars

pub mod console;
pub mod progress;

pub use console::{print_banner, print_error};
pub use progress::{create_download_bar, wants_progress, PROGRESS_THRESHOLD};
