//! Command-line argument definitions using clap.

use std::ffi::OsString;

use clap::Parser;

/// Instagram post downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "ig-downloader",
    version,
    about = "Download the image or video of an Instagram post",
    long_about = "Download the image or video of a single Instagram post.\n\n\
                  Videos are saved to ./videos/<id>.mp4 and images to ./images/<id>.jpg."
)]
pub struct Args {
    /// Post URL, as copied from the share menu.
    /// The single-dash form `-url <URL>` is also accepted.
    #[arg(short, long)]
    pub url: Option<String>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Parse the process arguments, accepting the single-dash `-url` flag.
    pub fn parse_with_legacy_flags() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }
}

/// Rewrite `-url` and `-url=<URL>` to their double-dash forms.
///
/// Without this clap would read `-url` as `-u rl`.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-url") => OsString::from("--url"),
            Some(s) if s.starts_with("-url=") => OsString::from(format!("-{}", s)),
            _ => arg,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(normalize_legacy_flags(args.iter().map(OsString::from))).unwrap()
    }

    #[test]
    fn test_legacy_url_flag() {
        let args = parse(&["ig-downloader", "-url", "https://example.com/p/ABC123/"]);
        assert_eq!(args.url.as_deref(), Some("https://example.com/p/ABC123/"));
        assert!(!args.debug);
    }

    #[test]
    fn test_legacy_url_flag_with_equals() {
        let args = parse(&["ig-downloader", "-url=https://example.com/p/ABC123/"]);
        assert_eq!(args.url.as_deref(), Some("https://example.com/p/ABC123/"));
    }

    #[test]
    fn test_modern_flags() {
        let args = parse(&["ig-downloader", "--url", "https://example.com/p/A/", "--debug"]);
        assert_eq!(args.url.as_deref(), Some("https://example.com/p/A/"));
        assert!(args.debug);

        let args = parse(&["ig-downloader", "-u", "https://example.com/p/B/"]);
        assert_eq!(args.url.as_deref(), Some("https://example.com/p/B/"));
    }

    #[test]
    fn test_missing_url_parses() {
        assert!(parse(&["ig-downloader"]).url.is_none());
        assert_eq!(parse(&["ig-downloader", "-url", ""]).url.as_deref(), Some(""));
    }
}
