//! Player session bootstrap: identifier precondition, cache read, handle
//! binding, and the cache-miss terminal path.
//!
//! Responsibilities:
//! - Refuse to initialize without a video identifier (redirect, never a
//!   partial session).
//! - Read the single cache slot; absence resolves to a redirect, never to a
//!   network fetch (the backend holds no playable bytes).
//! - Hold at most one live media handle; re-binding releases the prior
//!   handle before deriving the next.

use crate::error::{Result, SceneseekError};
use crate::playback::{MediaHandle, PlaybackSurface};
use crate::session::HistoryLog;
use crate::store::MediaCache;
use crate::types::VideoIdentifier;

/// Why the player view could not start and the host must redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// No identifier in the navigation context.
    MissingIdentifier,
    /// The cache slot is absent or was evicted since the upload.
    CacheExpired,
}

impl RedirectReason {
    /// Alert-equivalent text for the host to show before redirecting.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingIdentifier => "No video selected.",
            Self::CacheExpired => "Video cache expired or not found. Please upload again.",
        }
    }
}

/// Result of entering the player view.
#[derive(Debug)]
pub enum BootstrapOutcome<B, P> {
    /// Session is live; the surface has the cached video bound.
    Ready(PlayerSession<B, P>),
    /// Terminal for this page load; redirect to the upload view.
    Redirect(RedirectReason),
}

/// One player-view session: the active identifier, the bound playback
/// surface, the query pipeline, and the history log.
#[derive(Debug)]
pub struct PlayerSession<B, P> {
    pub(crate) backend: B,
    pub(crate) surface: P,
    pub(crate) identifier: VideoIdentifier,
    pub(crate) history: HistoryLog,
    pub(crate) handle: Option<MediaHandle>,
    pub(crate) query_pending: bool,
}

impl<B, P: PlaybackSurface> PlayerSession<B, P> {
    /// Enter the player view.
    ///
    /// `navigation` is the raw `video` parameter value, if any. A missing
    /// identifier or an empty cache resolves to a redirect outcome; errors
    /// are reserved for storage and surface failures.
    pub fn bootstrap<C: MediaCache>(
        store: &C,
        backend: B,
        mut surface: P,
        navigation: Option<&str>,
    ) -> Result<BootstrapOutcome<B, P>> {
        let identifier = match VideoIdentifier::from_navigation(navigation) {
            Ok(identifier) => identifier,
            Err(SceneseekError::MissingIdentifier) => {
                tracing::warn!("player entered without a video identifier");
                return Ok(BootstrapOutcome::Redirect(RedirectReason::MissingIdentifier));
            }
            Err(err) => return Err(err),
        };

        let Some(video) = store.get()? else {
            tracing::warn!(identifier = %identifier, "cache miss on player bootstrap");
            return Ok(BootstrapOutcome::Redirect(RedirectReason::CacheExpired));
        };

        let handle = MediaHandle::derive(&video)?;
        surface.bind(&handle)?;
        tracing::debug!(identifier = %identifier, handle.id = %handle.id(), "player ready");

        Ok(BootstrapOutcome::Ready(Self {
            backend,
            surface,
            identifier,
            history: HistoryLog::new(),
            handle: Some(handle),
            query_pending: false,
        }))
    }

    /// Re-derive and re-bind the media handle from the store.
    ///
    /// The prior handle is released first, so the session never holds two
    /// live handles. Returns `Ok(false)` on a cache miss, in which case the
    /// session no longer has a bound source and the host should redirect.
    pub fn rebind<C: MediaCache>(&mut self, store: &C) -> Result<bool> {
        self.handle = None;
        let Some(video) = store.get()? else {
            tracing::warn!(identifier = %self.identifier, "cache miss on rebind");
            return Ok(false);
        };
        let handle = MediaHandle::derive(&video)?;
        self.surface.bind(&handle)?;
        self.handle = Some(handle);
        Ok(true)
    }

    pub fn identifier(&self) -> &VideoIdentifier {
        &self.identifier
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Currently bound media handle, if the last (re)bind succeeded.
    pub fn media_handle(&self) -> Option<&MediaHandle> {
        self.handle.as_ref()
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }
}
