//! Card image search client
//!
//! Card imagery comes from an image search service, independent of the
//! structured card data source. The two are queried concurrently by the
//! lookup orchestrator and joined.

use crate::api::USER_AGENT;
use crate::error::{SyncError, SyncResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Production endpoint for card image search
const IMAGE_SEARCH_BASE_URL: &str = "https://serpapi.com";

/// One image hit returned by the image search service
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ImageResult {
    pub url: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Image search response. The result list may be absent entirely, which
/// deserializes to an empty list.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ImageSearchResponse {
    #[serde(default)]
    pub images_results: Vec<ImageResult>,
}

/// Card image search, keyed by a free-form search term
#[async_trait]
pub trait CardImageSource: Send + Sync {
    async fn fetch_card_image(&self, term: &str) -> SyncResult<ImageSearchResponse>;
}

/// HTTP-backed card image source
pub struct HttpCardImageSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpCardImageSource {
    /// Client against the production image search endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(IMAGE_SEARCH_BASE_URL, api_key)
    }

    /// Client against the given base URL (for testing with mock servers)
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl CardImageSource for HttpCardImageSource {
    async fn fetch_card_image(&self, term: &str) -> SyncResult<ImageSearchResponse> {
        let url = format!("{}/search.json", self.base_url);

        log::debug!("Searching card images for: {}", term);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("engine", "google_images"),
                ("q", term),
                ("api_key", self.api_key.as_str()),
            ])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<ImageSearchResponse>().await?)
        } else {
            Err(SyncError::HttpStatus(response.status()))
        }
    }
}

#[cfg(test)]
#[path = "image_search_tests.rs"]
mod tests;
