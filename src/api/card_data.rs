//! Card metadata search client
//!
//! Structured card data comes from the card database's fuzzy-name search
//! endpoint. Uses async reqwest for non-blocking HTTP requests.

use crate::api::USER_AGENT;
use crate::error::{SyncError, SyncResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Production endpoint for structured card data
const CARD_DATA_BASE_URL: &str = "https://api.scryfall.com";

/// Structured card data returned by the metadata source
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CardMetadata {
    pub name: String,
    #[serde(default)]
    pub set_name: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub oracle_text: Option<String>,
}

/// Error response returned by the card data source
#[derive(Debug, Deserialize)]
pub struct CardDataError {
    pub status: u16,
    pub code: String,
    pub details: String,
}

/// Structured card data lookup, keyed by a free-form search term
#[async_trait]
pub trait CardDataSource: Send + Sync {
    async fn fetch_card_data(&self, term: &str) -> SyncResult<CardMetadata>;
}

/// HTTP-backed card data source
pub struct HttpCardDataSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCardDataSource {
    /// Client against the production card data endpoint
    pub fn new() -> Self {
        Self::with_base_url(CARD_DATA_BASE_URL)
    }

    /// Client against the given base URL (for testing with mock servers)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpCardDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CardDataSource for HttpCardDataSource {
    async fn fetch_card_data(&self, term: &str) -> SyncResult<CardMetadata> {
        let url = format!(
            "{}/cards/named?fuzzy={}",
            self.base_url,
            urlencoding::encode(term)
        );

        log::debug!("Fetching card data for: {}", term);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<CardMetadata>().await?)
        } else {
            let status = response.status();
            match response.json::<CardDataError>().await {
                Ok(error) => Err(SyncError::Remote {
                    code: error.code,
                    details: error.details,
                }),
                Err(_) => Err(SyncError::HttpStatus(status)),
            }
        }
    }
}

#[cfg(test)]
#[path = "card_data_tests.rs"]
mod tests;
