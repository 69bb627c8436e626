//! Request URL construction.

/// Query fragment added by the "copy link" share action.
pub const SHARE_MARKER: &str = "utm_source=ig_web_copy_link";

/// Query fragment asking the endpoint for the JSON variant of a post.
pub const JSON_MARKER: &str = "__a=1";

/// Rewrite a shared post URL into the metadata request URL.
///
/// URLs without the share marker are returned unchanged.
pub fn request_url(post_url: &str) -> String {
    post_url.replace(SHARE_MARKER, JSON_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_replaces_share_marker() {
        assert_eq!(
            request_url("https://example.com/p/ABC123/?utm_source=ig_web_copy_link"),
            "https://example.com/p/ABC123/?__a=1"
        );
    }

    #[test]
    fn test_request_url_keeps_surrounding_query() {
        assert_eq!(
            request_url("https://example.com/p/ABC123/?igsh=x&utm_source=ig_web_copy_link#top"),
            "https://example.com/p/ABC123/?igsh=x&__a=1#top"
        );
    }

    #[test]
    fn test_request_url_without_marker_is_identity() {
        for url in [
            "https://example.com/p/ABC123/",
            "https://example.com/p/ABC123/?__a=1",
            "https://example.com/p/ABC123/?utm_source=other",
            "not a url at all",
        ] {
            assert_eq!(request_url(url), url);
        }
    }
}
