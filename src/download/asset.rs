//! Asset file downloading.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::Response;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::MediaApi;
use crate::config::{ErrorPolicy, ERR_GENERIC, ERR_SAVE_FAIL};
use crate::error::{Error, Result};
use crate::fs::ensure_dir;
use crate::media::SelectedAsset;
use crate::output::{create_download_bar, wants_progress};

/// Download an asset into `target_dir`, overwriting any existing file.
///
/// Directory creation failure always aborts. Request, file and stream
/// failures go through `policy`; when they are absorbed the target may be
/// left empty or truncated, and the saved message is still logged.
pub async fn download_asset(
    api: &MediaApi,
    asset: &SelectedAsset,
    target_dir: &Path,
    policy: ErrorPolicy,
) -> Result<PathBuf> {
    tracing::info!("Downloading {}...", asset.kind);

    ensure_dir(target_dir)?;

    let output_path = target_dir.join(&asset.file_name);

    let response = policy.absorb(api.download_file(&asset.url).await, ERR_GENERIC)?;

    let file = File::create(&output_path)
        .await
        .map_err(|source| save_error(&output_path, source));
    let file = policy.absorb(file, ERR_SAVE_FAIL)?;

    if let (Some(response), Some(file)) = (response, file) {
        let written = stream_to_file(response, file, &output_path).await;
        let message = match &written {
            Err(err) => failure_message(err),
            Ok(_) => ERR_SAVE_FAIL,
        };
        if let Some(bytes) = policy.absorb(written, message)? {
            tracing::debug!("Wrote {} bytes to {}", bytes, output_path.display());
        }
    }

    tracing::info!(
        "File {} is saved in {}/",
        asset.file_name,
        target_dir.display()
    );

    Ok(output_path)
}

/// Stream a response body into an open file.
async fn stream_to_file(response: Response, mut file: File, output_path: &Path) -> Result<u64> {
    let content_length = response.content_length();

    let progress = if wants_progress(content_length) {
        Some(create_download_bar(content_length.unwrap_or(0)))
    } else {
        None
    };

    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk)
            .await
            .map_err(|source| save_error(output_path, source))?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush()
        .await
        .map_err(|source| save_error(output_path, source))?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(downloaded)
}

/// User-facing message for a failure while copying the body.
fn failure_message(err: &Error) -> &'static str {
    match err {
        Error::SaveFile { .. } => ERR_SAVE_FAIL,
        _ => ERR_GENERIC,
    }
}

fn save_error(path: &Path, source: std::io::Error) -> Error {
    Error::SaveFile {
        path: path.to_path_buf(),
        source,
    }
}
