//! Console output utilities.

use console::style;

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    println!(
        "{}",
        style("Instagram Image/Video Downloader").cyan().bold()
    );
}
