//! Asset selection from a media descriptor.

use crate::api::types::MediaDescriptor;
use crate::media::kind::MediaKind;

/// The one asset chosen for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedAsset {
    /// Asset URL. May be empty when the metadata carried none.
    pub url: String,

    /// Output filename, `<id>.<ext>`.
    pub file_name: String,

    pub kind: MediaKind,
}

/// Choose the asset to download.
///
/// Videos always use `video_url`. Images use the last display resource when
/// more than one is present, since upstream lists them lowest resolution
/// first; otherwise they fall back to `display_url`.
pub fn select_asset(descriptor: &MediaDescriptor) -> SelectedAsset {
    let (kind, url) = if descriptor.is_video {
        (MediaKind::Video, descriptor.video_url.clone())
    } else {
        let url = match descriptor.display_resources.as_slice() {
            [_, .., last] => last.src.clone(),
            _ => descriptor.display_url.clone(),
        };
        (MediaKind::Image, url)
    };

    SelectedAsset {
        url,
        file_name: kind.file_name(&descriptor.id),
        kind,
    }
}
