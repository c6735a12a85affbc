//! Player session orchestrating bootstrap, queries, seeks, and history.

pub mod history;
pub mod lifecycle;
pub mod query;
pub mod seek;
pub mod upload;

pub use history::HistoryLog;
pub use lifecycle::{BootstrapOutcome, PlayerSession, RedirectReason};
pub use query::QuerySubmission;
pub use upload::{UploadCoordinator, UploadPhase};

use crate::types::VideoIdentifier;

/// Where the hosting frontend should navigate next.
///
/// The library never performs navigation itself; flows return transitions
/// for the host to enact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewTransition {
    /// Back to the upload view.
    Upload,
    /// Into the player view, carrying the identifier the view needs (the
    /// `video` URL parameter in a browser-style host).
    Player { video: VideoIdentifier },
}
