//! Progress bar utilities.

use indicatif::{ProgressBar, ProgressStyle};

/// Minimum file size to show a progress bar (20 MB).
pub const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Create a progress bar for downloads.
pub fn create_download_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    bar
}

/// Whether a download of the given size gets a progress bar.
pub fn wants_progress(content_length: Option<u64>) -> bool {
    content_length.is_some_and(|len| len > PROGRESS_THRESHOLD)
}
