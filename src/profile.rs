//! Remote profile reads with a client-side freshness policy
//!
//! Profiles are owned by the remote store; the client holds a time-bounded
//! cached copy only. A fetched profile is considered fresh for 24 hours
//! (no re-fetch on access alone) and an unused entry is retained for up to
//! 48 hours before eviction.

use crate::api::USER_AGENT;
use crate::error::{SyncError, SyncResult};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Hours a fetched profile stays fresh
pub const FRESHNESS_HOURS: i64 = 24;
/// Hours an unused cached profile is retained before eviction.
/// Always >= FRESHNESS_HOURS.
pub const RETENTION_HOURS: i64 = 48;

/// Profile fields selected from the remote store
pub const PROFILE_FIELDS: &str =
    "display_name,avatar_url,bio,location,is_seller,is_hobbyiest,last_seen_at";

/// Read-only projection of a user's profile row
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProfileRecord {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub is_seller: bool,
    #[serde(default)]
    pub is_hobbyiest: bool,
    #[serde(default)]
    pub last_seen_at: Option<DateTime<Utc>>,
}

/// Single-row profile read against the remote store.
///
/// `Ok(None)` means the profile does not exist, distinct from a failure;
/// errors are surfaced unmodified.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn fetch_profile_row(&self, user_id: &str) -> SyncResult<Option<ProfileRecord>>;
}

/// HTTP profile store speaking the remote store's filtered-read protocol
pub struct HttpProfileStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpProfileStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ProfileStore for HttpProfileStore {
    async fn fetch_profile_row(&self, user_id: &str) -> SyncResult<Option<ProfileRecord>> {
        let url = format!("{}/rest/v1/profiles", self.base_url);
        let filter = format!("eq.{}", user_id);

        log::debug!("Fetching profile for user: {}", user_id);

        let response = self
            .client
            .get(&url)
            .query(&[("select", PROFILE_FIELDS), ("id", filter.as_str())])
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SyncError::HttpStatus(response.status()));
        }

        // The filter guarantees at most one row; more is a remote-side
        // contract violation, not something to reconcile here
        let mut rows = response.json::<Vec<ProfileRecord>>().await?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            n => Err(SyncError::Remote {
                code: "multiple_rows".to_string(),
                details: format!("expected at most one profile row for {}, got {}", user_id, n),
            }),
        }
    }
}

struct CacheEntry {
    record: Option<ProfileRecord>,
    fetched_at: DateTime<Utc>,
    last_used_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        now - self.fetched_at < Duration::hours(FRESHNESS_HOURS)
    }

    fn is_retained_at(&self, now: DateTime<Utc>) -> bool {
        now - self.last_used_at <= Duration::hours(RETENTION_HOURS)
    }
}

/// Read-through accessor for profile rows with a long freshness window.
///
/// A cached result (including a cached absence) is returned without a
/// remote call while fresh; a stale entry is re-fetched on the next
/// access, never in the background. Entries unused past the retention
/// window are evicted on access sweeps. Remote errors propagate
/// unmodified and are never cached.
pub struct ProfileFetcher {
    store: Arc<dyn ProfileStore>,
    cache: Mutex<HashMap<String, CacheEntry>>,
}

impl ProfileFetcher {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self {
            store,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch a user's profile, serving the cached copy while it is fresh.
    /// `Ok(None)` means no such profile.
    pub async fn fetch_profile(&self, user_id: &str) -> SyncResult<Option<ProfileRecord>> {
        self.fetch_profile_at(user_id, Utc::now()).await
    }

    /// Clock-pinned variant backing [`fetch_profile`](Self::fetch_profile)
    async fn fetch_profile_at(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> SyncResult<Option<ProfileRecord>> {
        {
            let mut cache = self.cache.lock().unwrap();
            cache.retain(|_, entry| entry.is_retained_at(now));

            if let Some(entry) = cache.get_mut(user_id) {
                if entry.is_fresh_at(now) {
                    log::debug!("Profile cache hit for user: {}", user_id);
                    entry.last_used_at = now;
                    return Ok(entry.record.clone());
                }
                log::debug!("Profile cache stale for user: {}", user_id);
            }
        }

        let record = self.store.fetch_profile_row(user_id).await?;

        let mut cache = self.cache.lock().unwrap();
        cache.insert(
            user_id.to_string(),
            CacheEntry {
                record: record.clone(),
                fetched_at: now,
                last_used_at: now,
            },
        );
        Ok(record)
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
