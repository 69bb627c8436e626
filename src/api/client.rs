//! HTTP client for the metadata endpoint and asset downloads.

use reqwest::{header, Client, Response};
use url::Url;

use crate::api::types::{MediaDescriptor, MetadataResponse};
use crate::config::Settings;
use crate::error::Result;

/// Client for the unofficial JSON endpoint.
///
/// Holds two clients: the metadata client carries the identifying user agent
/// and the request timeout, while asset downloads go out with neither.
pub struct MediaApi {
    client: Client,
    download_client: Client,
}

impl MediaApi {
    /// Create a new API client from the runtime settings.
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&settings.user_agent)
            .timeout(settings.metadata_timeout)
            .build()?;

        let download_client = Client::builder().build()?;

        Ok(Self {
            client,
            download_client,
        })
    }

    /// Fetch and decode the metadata of a post.
    pub async fn fetch_descriptor(&self, request_url: &str) -> Result<MediaDescriptor> {
        let url = Url::parse(request_url)?;

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        tracing::debug!("Response status: {}", response.status());

        let text = response.text().await?;
        tracing::debug!("Metadata response length: {} bytes", text.len());

        let metadata: MetadataResponse = serde_json::from_str(&text)?;

        Ok(metadata.into())
    }

    /// Start downloading an asset.
    ///
    /// The status code is not checked; whatever body the server returns is
    /// what gets saved.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self.download_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Asset request returned HTTP {}", status);
        }

        Ok(response)
    }
}
