//! Input validation logic.

use crate::config::settings::ERR_INVALID_URL;
use crate::error::{Error, Result};
use regex::Regex;

/// Validate the post URL argument.
///
/// Only emptiness is checked; the URL is passed through to the fetch verbatim.
pub fn validate_post_url(input: Option<&str>) -> Result<&str> {
    let url = input.unwrap_or_default();

    if url.is_empty() {
        return Err(Error::Usage(ERR_INVALID_URL.to_string()));
    }

    Ok(url)
}

/// Extract the post shortcode from a post, reel or tv URL.
pub fn parse_shortcode(input: &str) -> Option<String> {
    // Pattern: https://www.instagram.com/p/ABC123/
    let pattern = Regex::new(r"/(?:p|reel|reels|tv)/([A-Za-z0-9_-]+)").ok()?;

    pattern
        .captures(input.trim())
        .and_then(|captures| captures.get(1))
        .map(|code| code.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_post_url() {
        let url = "https://example.com/p/ABC123/?utm_source=ig_web_copy_link";
        assert_eq!(validate_post_url(Some(url)).unwrap(), url);
    }

    #[test]
    fn test_validate_post_url_is_verbatim() {
        // Surrounding whitespace is not stripped
        assert_eq!(
            validate_post_url(Some(" https://example.com/p/ABC123/ ")).unwrap(),
            " https://example.com/p/ABC123/ "
        );
        assert_eq!(validate_post_url(Some("   ")).unwrap(), "   ");
    }

    #[test]
    fn test_validate_post_url_empty() {
        assert!(matches!(validate_post_url(None), Err(Error::Usage(_))));
        assert!(matches!(validate_post_url(Some("")), Err(Error::Usage(_))));
    }

    #[test]
    fn test_parse_shortcode() {
        assert_eq!(
            parse_shortcode("https://www.instagram.com/p/ABC123/?utm_source=ig_web_copy_link"),
            Some("ABC123".to_string())
        );
        assert_eq!(
            parse_shortcode("https://www.instagram.com/reel/Cx_9-z/"),
            Some("Cx_9-z".to_string())
        );
        assert_eq!(parse_shortcode("https://example.com/about"), None);
    }
}
