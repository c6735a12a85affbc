//! Query resolution: gated submission, answer parsing, and fan-out to the
//! history log and the seek controller.

use uuid::Uuid;

use crate::backend::IndexingBackend;
use crate::error::Result;
use crate::playback::PlaybackSurface;
use crate::session::PlayerSession;

/// Outcome of one query submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySubmission {
    /// Empty or whitespace-only input; nothing was sent and no history
    /// entry was created.
    Rejected,
    /// A request is already in flight for this control; the submission was
    /// refused to keep exactly one request pending.
    Busy,
    /// The answer (found or not) was recorded under this history entry id.
    Answered(Uuid),
}

impl<B: IndexingBackend, P: PlaybackSurface> PlayerSession<B, P> {
    /// Submit a natural-language query against the active video.
    ///
    /// A parsed answer always yields a history entry; a found answer also
    /// seeks to its timestamp. A transport or parse failure restores the
    /// ready state (the pending flag never sticks) and records nothing.
    pub fn submit_query(&mut self, raw: &str) -> Result<QuerySubmission> {
        let query = raw.trim();
        if query.is_empty() {
            tracing::debug!("ignoring empty query");
            return Ok(QuerySubmission::Rejected);
        }
        if self.query_pending {
            tracing::debug!("query already in flight, refusing submission");
            return Ok(QuerySubmission::Busy);
        }

        self.query_pending = true;
        let outcome = self.backend.ask(query, &self.identifier);
        self.query_pending = false;

        let answer = outcome?;
        let target = answer.seek_target();
        let entry_id = self.history.append(query, answer).id;

        if let Some(seconds) = target {
            // An out-of-range timestamp must not undo the recorded answer.
            if let Err(err) = self.seek_to(seconds) {
                tracing::warn!(error = %err, "answer carried an unusable timestamp");
            }
        }
        Ok(QuerySubmission::Answered(entry_id))
    }

    /// Replay a prior found answer, seeking to its original timestamp.
    ///
    /// Returns `Ok(false)` when the entry does not exist or was a not-found
    /// answer (those carry no activation). Valid any number of times, in
    /// any order; each replay uses the entry's own timestamp.
    pub fn replay(&mut self, entry_id: Uuid) -> Result<bool> {
        let Some(target) = self
            .history
            .find(entry_id)
            .and_then(|entry| entry.seek_target())
        else {
            return Ok(false);
        };
        self.seek_to(target)?;
        Ok(true)
    }

    /// True while an ask request is in flight; the host disables the
    /// submission control for the duration.
    pub fn query_pending(&self) -> bool {
        self.query_pending
    }
}
