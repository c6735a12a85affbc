//! Structured result of resolving one natural-language query.

use serde::{Deserialize, Serialize};

/// Answer payload returned by the backend's ask endpoint.
///
/// `start` and `answer` are only meaningful when `found` is true; a
/// not-found answer never supplies a timestamp to any consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryAnswer {
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl QueryAnswer {
    pub fn not_found() -> Self {
        Self {
            found: false,
            start: None,
            answer: None,
        }
    }

    pub fn found_at(start: f64, answer: impl Into<String>) -> Self {
        Self {
            found: true,
            start: Some(start),
            answer: Some(answer.into()),
        }
    }

    /// Timestamp to seek to, present only for trustworthy (found) answers.
    pub fn seek_target(&self) -> Option<f64> {
        if self.found { self.start } else { None }
    }
}
