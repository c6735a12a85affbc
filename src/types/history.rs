//! Immutable records pairing a submitted query with its answer.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::answer::QueryAnswer;

/// One (query, answer) pair in the session history.
///
/// Entries are created once and never mutated; the log orders them
/// newest-first. Found entries can be replayed to seek back to their
/// original timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Stable identity used for replay, independent of display order.
    pub id: Uuid,
    pub query: String,
    pub answer: QueryAnswer,
    #[serde(with = "time::serde::rfc3339")]
    pub asked_at: OffsetDateTime,
}

impl HistoryEntry {
    pub(crate) fn new(query: impl Into<String>, answer: QueryAnswer) -> Self {
        Self {
            id: Uuid::new_v4(),
            query: query.into(),
            answer,
            asked_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.answer.found
    }

    /// Timestamp this entry replays to, if it carries one.
    pub fn seek_target(&self) -> Option<f64> {
        self.answer.seek_target()
    }

    /// `m:ss` badge for a found entry, e.g. `2:05` for 125.4 seconds.
    pub fn time_badge(&self) -> Option<String> {
        self.seek_target().map(format_badge)
    }
}

fn format_badge(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}
