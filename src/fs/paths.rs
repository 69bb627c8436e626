//! Path and directory management.

use std::fs::DirBuilder;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::media::MediaKind;

/// Get the download directory for a media kind.
pub fn get_download_path(settings: &Settings, kind: MediaKind) -> PathBuf {
    settings.output_root.join(kind.folder_name())
}

/// Ensure a directory exists, creating it with mode 0755 if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder.create(path).map_err(|source| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
