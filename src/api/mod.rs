//! API clients for the two card lookup sources (structured data, imagery)

pub mod card_data;
pub mod image_search;

/// User-Agent sent on every outbound request
pub(crate) const USER_AGENT: &str = "CardSync/1.0";

pub use card_data::{CardDataSource, CardMetadata, HttpCardDataSource};
pub use image_search::{CardImageSource, HttpCardImageSource, ImageResult, ImageSearchResponse};
