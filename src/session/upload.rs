//! Upload coordination: cache locally, then index, then hand off to the
//! player view.
//!
//! The ordering is load-bearing: the backend must never learn about a video
//! the client has not durably cached, otherwise the server could consider a
//! video indexed while the client has nothing to play.

use crate::backend::IndexingBackend;
use crate::error::{Result, SceneseekError};
use crate::session::ViewTransition;
use crate::store::MediaCache;

/// Observable progress of one upload attempt, distinct from idle and from
/// terminal failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    /// Step 1: persisting bytes into the local cache slot.
    CachingLocally,
    /// Step 2: backend indexing request in flight.
    Indexing,
    /// The last attempt failed; see the returned error for whether the
    /// cached blob is still usable for a retry.
    Failed,
}

/// Sequences the upload flow against a cache and a backend.
pub struct UploadCoordinator<'a, C, B> {
    cache: &'a mut C,
    backend: &'a B,
    phase: UploadPhase,
}

impl<'a, C: MediaCache, B: IndexingBackend> UploadCoordinator<'a, C, B> {
    pub fn new(cache: &'a mut C, backend: &'a B) -> Self {
        Self {
            cache,
            backend,
            phase: UploadPhase::Idle,
        }
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    /// Run the full sequence for a user-selected file: durably cache the
    /// bytes, submit them for indexing, and return the transition into the
    /// player view carrying the backend's canonical filename.
    ///
    /// A storage failure aborts before any network call and is not
    /// retryable. An indexing failure leaves the cached blob intact; retry
    /// with [`Self::retry_index`] without re-selecting the file.
    pub fn submit(
        &mut self,
        filename: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<ViewTransition> {
        if filename.trim().is_empty() || bytes.is_empty() {
            return Err(SceneseekError::UploadFailed {
                reason: "no file selected".to_string(),
            });
        }

        self.phase = UploadPhase::CachingLocally;
        tracing::debug!(filename, size = bytes.len(), "caching video locally");
        if let Err(err) = self.cache.put(bytes, content_type) {
            self.phase = UploadPhase::Failed;
            return Err(err);
        }

        self.index(filename, bytes)
    }

    /// Re-run only the indexing step against the already-cached blob.
    pub fn retry_index(&mut self, filename: &str) -> Result<ViewTransition> {
        let Some(video) = self.cache.get()? else {
            self.phase = UploadPhase::Failed;
            return Err(SceneseekError::UploadFailed {
                reason: "no cached video to retry; select the file again".to_string(),
            });
        };
        self.index(filename, &video.bytes)
    }

    fn index(&mut self, filename: &str, bytes: &[u8]) -> Result<ViewTransition> {
        self.phase = UploadPhase::Indexing;
        let receipt = match self.backend.upload(filename, bytes) {
            Ok(receipt) => receipt,
            Err(err) => {
                // The slot keeps the blob; only the indexing step failed.
                self.phase = UploadPhase::Failed;
                return Err(err);
            }
        };

        self.phase = UploadPhase::Idle;
        tracing::debug!(identifier = %receipt.identifier, "upload complete, entering player");
        Ok(ViewTransition::Player {
            video: receipt.identifier,
        })
    }
}
