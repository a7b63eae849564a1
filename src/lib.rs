//! Client-side card data synchronization
//!
//! The layer the app's screens sit on top of: a namespace-aware shared
//! card cache with per-key change notification, a query key registry, a
//! two-source card lookup orchestrator, and a remote profile fetcher with
//! a long client-side freshness window.

pub mod api;
pub mod cache;
pub mod error;
pub mod lookup;
pub mod models;
pub mod profile;

// Re-export commonly used items
pub use api::{
    CardDataSource, CardImageSource, CardMetadata, HttpCardDataSource, HttpCardImageSource,
    ImageResult, ImageSearchResponse,
};
pub use cache::{CacheSlice, CardCacheStore, Namespace, QueryKey};
pub use error::{SyncError, SyncResult};
pub use lookup::{CardLookupOrchestrator, LookupState};
pub use models::CardEntity;
pub use profile::{
    HttpProfileStore, ProfileFetcher, ProfileRecord, ProfileStore, FRESHNESS_HOURS,
    RETENTION_HOURS,
};
