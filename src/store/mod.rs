//! Single-slot durable store for the active video's bytes.
//!
//! Responsibilities:
//! - Own the only durable copy of the video across page/session reloads.
//! - Enforce the single active-video invariant: one fixed slot, replaced
//!   atomically on every upload (no per-filename keying).
//! - Bootstrap the store directory and schema marker on first use; take an
//!   advisory lock so a second handle cannot interleave writes.
//! - Report an absent or externally evicted slot as a normal outcome, not an
//!   error.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use atomic_write_file::AtomicWriteFile;
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::constants::{
    SCHEMA_MARKER_FILE, SLOT_FILE, SLOT_META_FILE, STORE_LOCK_FILE, STORE_SCHEMA_VERSION,
};
use crate::error::{Result, SceneseekError};
use crate::types::StoreOptions;

/// The binary content of the uploaded file, as read back from the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredVideo {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Sidecar persisted next to the slot so reads can detect truncation or
/// corruption left behind by external storage eviction.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SlotMetadata {
    content_type: String,
    length: u64,
    checksum: String,
}

/// Storage seam for the cache slot. [`MediaStore`] is the durable
/// implementation; tests substitute in-memory or failing fakes.
pub trait MediaCache {
    /// Atomically replace the slot. Returns only once the write is durably
    /// committed, never while it is merely queued.
    fn put(&mut self, bytes: &[u8], content_type: &str) -> Result<()>;

    /// Read the slot. `Ok(None)` means the slot was never written or was
    /// cleared externally; absence is never an error.
    fn get(&self) -> Result<Option<StoredVideo>>;
}

/// Durable single-slot store rooted at a directory.
///
/// Holds the directory path and an exclusive advisory lock for the lifetime
/// of the handle. Schema version 1; the only "migration" is create-if-absent.
pub struct MediaStore {
    root: PathBuf,
    verify_checksums: bool,
    _lock: File,
}

impl std::fmt::Debug for MediaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaStore")
            .field("root", &self.root)
            .field("verify_checksums", &self.verify_checksums)
            .finish_non_exhaustive()
    }
}

impl MediaStore {
    /// Idempotently open (creating if needed) the store at `root`.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        Self::open_with(StoreOptions::new(root.as_ref()))
    }

    /// Open with explicit [`StoreOptions`].
    pub fn open_with(options: StoreOptions) -> Result<Self> {
        let root = options.root;
        fs_err::create_dir_all(&root).map_err(|err| SceneseekError::StorageUnavailable {
            reason: format!("cannot create store directory: {err}"),
        })?;

        ensure_schema_marker(&root)?;

        let lock_path = root.join(STORE_LOCK_FILE);
        let lock = File::options()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|err| SceneseekError::StorageUnavailable {
                reason: format!("cannot open store lock: {err}"),
            })?;
        lock.try_lock_exclusive()
            .map_err(|err| SceneseekError::StorageUnavailable {
                reason: format!("store is locked by another handle: {err}"),
            })?;

        tracing::debug!(root = %root.display(), "media store opened");
        Ok(Self {
            root,
            verify_checksums: options.verify_checksums,
            _lock: lock,
        })
    }

    fn slot_path(&self) -> PathBuf {
        self.root.join(SLOT_FILE)
    }

    fn meta_path(&self) -> PathBuf {
        self.root.join(SLOT_META_FILE)
    }
}

impl MediaCache for MediaStore {
    fn put(&mut self, bytes: &[u8], content_type: &str) -> Result<()> {
        let metadata = SlotMetadata {
            content_type: content_type.to_string(),
            length: bytes.len() as u64,
            checksum: hex::encode(blake3::hash(bytes).as_bytes()),
        };
        let metadata_json =
            serde_json::to_vec_pretty(&metadata).map_err(|err| SceneseekError::StorageWrite {
                reason: format!("cannot encode slot metadata: {err}"),
            })?;

        // Blob lands before the sidecar; readers start from the sidecar, so
        // a crash between the two writes reads as the previous generation.
        write_atomic(&self.slot_path(), bytes).map_err(|err| SceneseekError::StorageWrite {
            reason: format!("cannot write cache slot: {err}"),
        })?;
        write_atomic(&self.meta_path(), &metadata_json).map_err(|err| {
            SceneseekError::StorageWrite {
                reason: format!("cannot write slot metadata: {err}"),
            }
        })?;

        tracing::debug!(
            slot.length = metadata.length,
            slot.content_type = %metadata.content_type,
            "cache slot replaced"
        );
        Ok(())
    }

    fn get(&self) -> Result<Option<StoredVideo>> {
        let metadata_bytes = match fs_err::read(self.meta_path()) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(SceneseekError::StorageUnavailable {
                    reason: format!("cannot read slot metadata: {err}"),
                });
            }
        };
        let metadata: SlotMetadata = match serde_json::from_slice(&metadata_bytes) {
            Ok(metadata) => metadata,
            Err(err) => {
                tracing::warn!(error = %err, "slot metadata unreadable, treating as evicted");
                return Ok(None);
            }
        };

        let bytes = match fs_err::read(self.slot_path()) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("cache slot missing beneath its metadata, treating as evicted");
                return Ok(None);
            }
            Err(err) => {
                return Err(SceneseekError::StorageUnavailable {
                    reason: format!("cannot read cache slot: {err}"),
                });
            }
        };

        if bytes.len() as u64 != metadata.length {
            tracing::warn!(
                expected = metadata.length,
                actual = bytes.len(),
                "cache slot truncated, treating as evicted"
            );
            return Ok(None);
        }
        if self.verify_checksums {
            let checksum = hex::encode(blake3::hash(&bytes).as_bytes());
            if checksum != metadata.checksum {
                tracing::warn!("cache slot checksum mismatch, treating as evicted");
                return Ok(None);
            }
        }

        Ok(Some(StoredVideo {
            bytes,
            content_type: metadata.content_type,
        }))
    }
}

fn ensure_schema_marker(root: &Path) -> Result<()> {
    let marker = root.join(SCHEMA_MARKER_FILE);
    match fs_err::read_to_string(&marker) {
        Ok(raw) => {
            let version: u32 =
                raw.trim()
                    .parse()
                    .map_err(|_| SceneseekError::StorageUnavailable {
                        reason: format!("unreadable schema marker: {raw:?}"),
                    })?;
            if version != STORE_SCHEMA_VERSION {
                return Err(SceneseekError::StorageUnavailable {
                    reason: format!(
                        "unsupported store schema version {version} (expected {STORE_SCHEMA_VERSION})"
                    ),
                });
            }
            Ok(())
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            write_atomic(&marker, STORE_SCHEMA_VERSION.to_string().as_bytes()).map_err(|err| {
                SceneseekError::StorageUnavailable {
                    reason: format!("cannot write schema marker: {err}"),
                }
            })
        }
        Err(err) => Err(SceneseekError::StorageUnavailable {
            reason: format!("cannot read schema marker: {err}"),
        }),
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = AtomicWriteFile::open(path)?;
    file.write_all(bytes)?;
    file.commit()
}
