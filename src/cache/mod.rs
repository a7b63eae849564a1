//! Shared card cache: query key registry and the namespace-aware store

pub mod keys;
pub mod store;

pub use keys::{Namespace, QueryKey};
pub use store::{CacheSlice, CardCacheStore};
