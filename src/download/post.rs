//! Single post download logic.

use std::path::PathBuf;

use crate::api::{request_url, MediaApi};
use crate::config::{parse_shortcode, Settings, ERR_GENERIC};
use crate::download::asset::download_asset;
use crate::error::{Error, Result};
use crate::fs::get_download_path;
use crate::media::select_asset;

/// Download the primary media of a post.
///
/// Returns the path written to, or `None` when the run ended without a
/// download under a lenient error policy.
pub async fn download_post(
    api: &MediaApi,
    settings: &Settings,
    post_url: &str,
) -> Result<Option<PathBuf>> {
    let policy = settings.policy;

    if let Some(shortcode) = parse_shortcode(post_url) {
        tracing::debug!("Post shortcode: {}", shortcode);
    }

    let request_url = request_url(post_url);

    // A failed fetch continues with an empty descriptor
    let descriptor = policy
        .absorb(api.fetch_descriptor(&request_url).await, ERR_GENERIC)?
        .unwrap_or_default();

    let asset = select_asset(&descriptor);

    if asset.url.is_empty() {
        policy.skip(Error::EmptyAssetUrl(post_url.to_string()))?;
        return Ok(None);
    }

    let target_dir = get_download_path(settings, asset.kind);
    let path = download_asset(api, &asset, &target_dir, policy).await?;

    Ok(Some(path))
}
