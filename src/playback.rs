//! Playback surface seam and the transient media handle bound to it.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::error::Result;
use crate::store::StoredVideo;

/// Playback start was refused by the host environment (autoplay policy or
/// equivalent). Not an error: the position sticks and playback stays paused
/// until the user acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackStartRejected;

impl std::fmt::Display for PlaybackStartRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("playback start rejected by host environment")
    }
}

/// Session-scoped playable reference derived from the cached blob.
///
/// The bytes are materialized into a private temp file a player can consume
/// directly. The handle is never persisted; dropping it releases the file,
/// and re-deriving from the store is the only recovery path after a reload.
#[derive(Debug)]
pub struct MediaHandle {
    id: Uuid,
    content_type: String,
    length: u64,
    file: NamedTempFile,
}

impl MediaHandle {
    /// Materialize a handle from the stored video.
    pub fn derive(video: &StoredVideo) -> Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(&video.bytes)?;
        file.flush()?;
        let handle = Self {
            id: Uuid::new_v4(),
            content_type: video.content_type.clone(),
            length: video.bytes.len() as u64,
            file,
        };
        tracing::debug!(
            handle.id = %handle.id,
            handle.length = handle.length,
            "media handle derived"
        );
        Ok(handle)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    /// Filesystem path a playback surface can open as its source.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Seam to the host's player widget or process.
///
/// Implementations are single-threaded and driven by the session; they
/// should not assume a handle outlives the session that bound it.
pub trait PlaybackSurface {
    /// Bind `handle` as the active source, replacing any prior source.
    fn bind(&mut self, handle: &MediaHandle) -> Result<()>;

    /// Set the playback position in seconds. Never starts playback.
    fn set_position(&mut self, seconds: f64);

    /// Attempt to resume playback at the current position.
    fn play(&mut self) -> std::result::Result<(), PlaybackStartRejected>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_releases_its_file_on_drop() {
        let video = StoredVideo {
            bytes: b"not really an mp4".to_vec(),
            content_type: "video/mp4".to_string(),
        };
        let handle = MediaHandle::derive(&video).unwrap();
        let path = handle.path().to_path_buf();
        assert!(path.exists());
        assert_eq!(handle.length(), video.bytes.len() as u64);
        assert_eq!(handle.content_type(), "video/mp4");
        assert_eq!(std::fs::read(&path).unwrap(), video.bytes);

        drop(handle);
        assert!(!path.exists());
    }

    #[test]
    fn handles_have_distinct_identities() {
        let video = StoredVideo {
            bytes: vec![0u8; 16],
            content_type: "video/webm".to_string(),
        };
        let first = MediaHandle::derive(&video).unwrap();
        let second = MediaHandle::derive(&video).unwrap();
        assert_ne!(first.id(), second.id());
        assert_ne!(first.path(), second.path());
    }
}
