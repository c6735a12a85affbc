//! The backend-assigned name correlating the local cache with server-side
//! index data.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneseekError};

/// Canonical filename returned by the backend after indexing.
///
/// Used only as a correlation key sent with queries, never as a storage key.
/// Guaranteed non-empty; the player view cannot operate without one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoIdentifier(String);

impl VideoIdentifier {
    /// Wrap a backend-assigned filename. Empty or whitespace-only input is a
    /// missing identifier, which is terminal for the player view.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(SceneseekError::MissingIdentifier);
        }
        Ok(Self(raw))
    }

    /// Parse the optional `video` navigation parameter, e.g. the value a
    /// hosting frontend extracted from `/player?video=lecture.mp4`.
    pub fn from_navigation(param: Option<&str>) -> Result<Self> {
        match param {
            Some(value) => Self::new(value),
            None => Err(SceneseekError::MissingIdentifier),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
