//! Error taxonomy for the sceneseek-core crate.
//!
//! Two conditions are deliberately *not* errors:
//! - a cache miss: [`crate::store::MediaStore::get`] returns `Ok(None)`;
//! - a rejected playback start: [`crate::playback::PlaybackSurface::play`]
//!   returns its own [`crate::playback::PlaybackStartRejected`] marker, which
//!   callers log and swallow.

use thiserror::Error;

/// Errors surfaced by store, upload, bootstrap, and query operations.
#[derive(Debug, Error)]
pub enum SceneseekError {
    /// The local media store cannot be opened or read. Fatal for the current
    /// operation; there is no client-side recovery.
    #[error("local media store unavailable: {reason}")]
    StorageUnavailable { reason: String },

    /// Writing the cache slot failed (quota, permissions, aborted replace).
    /// Fatal for the upload attempt; the backend is never contacted for a
    /// video that was not cached first.
    #[error("local media store write failed: {reason}")]
    StorageWrite { reason: String },

    /// The player view was entered without a video identifier. Fatal
    /// precondition failure; the caller redirects to the upload view.
    #[error("no video identifier present in navigation context")]
    MissingIdentifier,

    /// The backend rejected or never received the indexing request. The
    /// locally cached blob is intact, so the submission may be retried.
    #[error("upload failed: {reason}")]
    UploadFailed { reason: String },

    /// The ask request failed in transport or produced an unparseable
    /// answer. Recoverable; the query UI returns to its ready state and no
    /// history entry is recorded.
    #[error("query failed: {reason}")]
    QueryFailed { reason: String },

    /// A timestamp could not be parsed into finite, non-negative seconds.
    /// The seek is skipped; playback state is untouched.
    #[error("invalid seek timestamp: {value:?}")]
    InvalidTimestamp { value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SceneseekError>;

impl SceneseekError {
    /// True for failures the user can retry without losing session state.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UploadFailed { .. } | Self::QueryFailed { .. } | Self::InvalidTimestamp { .. }
        )
    }
}
