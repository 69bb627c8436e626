//! Metadata response type definitions.

use serde::{Deserialize, Deserializer};

/// Top-level wrapper returned by the JSON endpoint.
///
/// Every field is optional on the wire; missing or `null` values decode to
/// their zero value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub graphql: Graphql,
}

/// The `graphql` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Graphql {
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_resources: Vec<DisplayResource>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shortcode_media: ShortcodeMedia,
}

/// One resolution variant of an image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DisplayResource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub config_width: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub config_height: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub src: String,
}

/// The `shortcode_media` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShortcodeMedia {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_video: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub video_url: String,
}

/// Decoded description of a post's primary media.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaDescriptor {
    /// Post media ID, used as the output filename stem.
    pub id: String,
    pub is_video: bool,
    /// Default image URL.
    pub display_url: String,
    /// Only meaningful when `is_video` is set.
    pub video_url: String,
    /// Image renditions, lowest to highest resolution as served upstream.
    pub display_resources: Vec<DisplayResource>,
}

impl From<MetadataResponse> for MediaDescriptor {
    fn from(response: MetadataResponse) -> Self {
        let Graphql {
            display_resources,
            shortcode_media,
        } = response.graphql;

        Self {
            id: shortcode_media.id,
            is_video: shortcode_media.is_video,
            display_url: shortcode_media.display_url,
            video_url: shortcode_media.video_url,
            display_resources,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
