//! Media kind representation.

use std::fmt;

use crate::config::{DIR_IMAGE, DIR_VIDEO};

/// Kind of asset a post resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Get the folder name for this media kind.
    pub fn folder_name(&self) -> &'static str {
        match self {
            MediaKind::Image => DIR_IMAGE,
            MediaKind::Video => DIR_VIDEO,
        }
    }

    /// File extension (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Image => "jpg",
            MediaKind::Video => "mp4",
        }
    }

    /// Build the output filename for a media ID.
    pub fn file_name(&self, media_id: &str) -> String {
        format!("{}.{}", media_id, self.extension())
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "Image"),
            MediaKind::Video => write!(f, "Video"),
        }
    }
}
