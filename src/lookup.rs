//! Card lookup orchestration
//!
//! A lookup fans out to the two independent card sources (structured data
//! and imagery), awaits both, and publishes loading/error/data state
//! through a watch channel. Exactly one lookup state is tracked per
//! orchestrator; starting a new lookup supersedes the previous state.

use crate::api::{CardDataSource, CardImageSource, CardMetadata, ImageResult};
use std::sync::Arc;
use tokio::sync::watch;

/// Observable state of the current card lookup.
///
/// `None` for `data`/`image_results` means the field has never been set by
/// a completed lookup; a completed lookup with no image hits is
/// `Some(empty)`, never `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupState {
    pub loading: bool,
    pub data: Option<CardMetadata>,
    pub image_results: Option<Vec<ImageResult>>,
    pub error: Option<String>,
}

/// Runs card lookups against the two remote sources and exposes the
/// result state to observers.
pub struct CardLookupOrchestrator {
    data_source: Arc<dyn CardDataSource>,
    image_source: Arc<dyn CardImageSource>,
    state: watch::Sender<LookupState>,
}

impl CardLookupOrchestrator {
    pub fn new(
        data_source: Arc<dyn CardDataSource>,
        image_source: Arc<dyn CardImageSource>,
    ) -> Self {
        let (state, _) = watch::channel(LookupState::default());
        Self {
            data_source,
            image_source,
            state,
        }
    }

    /// Snapshot of the current lookup state
    pub fn state(&self) -> LookupState {
        self.state.borrow().clone()
    }

    /// Observe every state replacement of this orchestrator's lookup
    pub fn subscribe(&self) -> watch::Receiver<LookupState> {
        self.state.subscribe()
    }

    /// Run one lookup for `term`.
    ///
    /// Both sources are queried concurrently and joined: the lookup
    /// succeeds only if both succeed. Either failure collapses the whole
    /// lookup to a failure and no partial result is published. Prior
    /// data/image results are retained while loading and on failure; only
    /// a successful lookup overwrites them.
    ///
    /// There is no queue, cancellation, or supersession guard: if lookups
    /// overlap, whichever completes last determines the published state,
    /// regardless of call order. Callers needing a stale-result guard
    /// must sequence-number their calls and discard superseded
    /// completions.
    pub async fn lookup(&self, term: &str) {
        log::debug!("Starting card lookup for: {}", term);
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        let (card, images) = tokio::join!(
            self.data_source.fetch_card_data(term),
            self.image_source.fetch_card_image(term),
        );

        match (card, images) {
            (Ok(card), Ok(images)) => {
                log::debug!("Card lookup succeeded for: {}", term);
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.data = Some(card);
                    state.image_results = Some(images.images_results);
                    state.error = None;
                });
            }
            // The metadata error wins when both sources fail
            (Err(err), _) | (_, Err(err)) => {
                log::warn!("Card lookup failed for {}: {}", term, err);
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.error = Some(err.to_string());
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "lookup_tests.rs"]
mod tests;
