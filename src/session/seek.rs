//! Deterministic seek-and-resume, tolerant of playback-start rejection.

use crate::backend::IndexingBackend;
use crate::error::{Result, SceneseekError};
use crate::playback::PlaybackSurface;
use crate::session::PlayerSession;

impl<B: IndexingBackend, P: PlaybackSurface> PlayerSession<B, P> {
    /// Seek to `seconds` and attempt to resume playback.
    ///
    /// The position is set even when resuming is rejected by the host
    /// (autoplay policy); rejection is logged at low severity and playback
    /// stays paused at the new position awaiting user action. Each call is
    /// authoritative: no queuing, no debounce, last call wins.
    pub fn seek_to(&mut self, seconds: f64) -> Result<()> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(SceneseekError::InvalidTimestamp {
                value: seconds.to_string(),
            });
        }

        tracing::debug!(seconds, "seeking");
        self.surface.set_position(seconds);
        if self.surface.play().is_err() {
            tracing::warn!(seconds, "playback start rejected, staying paused");
        }
        Ok(())
    }

    /// Seek from a textual timestamp, parsed permissively.
    ///
    /// Parse failure reports [`SceneseekError::InvalidTimestamp`] and
    /// performs no seek.
    pub fn seek_to_text(&mut self, raw: &str) -> Result<()> {
        let seconds: f64 =
            raw.trim()
                .parse()
                .map_err(|_| SceneseekError::InvalidTimestamp {
                    value: raw.to_string(),
                })?;
        self.seek_to(seconds)
    }
}
