//! Interface to the indexing and question-answering backend.
//!
//! The backend never stores playable video bytes; it only indexes them and
//! resolves queries to timestamps. This module pins down the two wire
//! contracts (`/api/upload`, `/api/ask`) behind a trait so the upload and
//! query flows can be exercised without a network.

mod http;

pub use http::{HttpBackend, HttpBackendBuilder};

use crate::error::Result;
use crate::types::{QueryAnswer, VideoIdentifier};

/// Successful outcome of submitting a video for indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    /// Canonical filename assigned by the backend. The backend may rewrite
    /// the submitted name (e.g. spaces become underscores); this value is
    /// authoritative and is the only name queries are correlated with.
    pub identifier: VideoIdentifier,
}

/// Backend seam used by the upload coordinator and query resolver.
pub trait IndexingBackend {
    /// Submit the video bytes for indexing. Errors map to
    /// [`crate::SceneseekError::UploadFailed`].
    fn upload(&self, filename: &str, bytes: &[u8]) -> Result<UploadReceipt>;

    /// Resolve a natural-language query against an indexed video. Errors map
    /// to [`crate::SceneseekError::QueryFailed`].
    fn ask(&self, query: &str, identifier: &VideoIdentifier) -> Result<QueryAnswer>;
}
