//! ig-downloader - download the image or video of a single Instagram post.
//!
//! The run is strictly linear:
//!
//! 1. rewrite the shared post URL into a JSON request URL
//! 2. fetch and decode the post metadata
//! 3. pick the video, or the highest resolution image
//! 4. stream the asset into `videos/` or `images/`
//!
//! # Example
//!
//! ```no_run
//! use ig_downloader::{download_post, MediaApi, Settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::default();
//!     let api = MediaApi::new(&settings)?;
//!
//!     let url = "https://www.instagram.com/p/ABC123/?utm_source=ig_web_copy_link";
//!     download_post(&api, &settings, url).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::{request_url, MediaApi, MediaDescriptor};
pub use config::{ErrorPolicy, Settings};
pub use download::{download_asset, download_post};
pub use error::{Error, Result};
pub use media::{select_asset, MediaKind, SelectedAsset};
