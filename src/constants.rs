//! Shared constants for the local store layout and backend wire contract.

/// On-disk schema version of the local media store. There is no migration
/// logic; an unknown version makes the store unavailable.
pub const STORE_SCHEMA_VERSION: u32 = 1;

/// Marker file recording [`STORE_SCHEMA_VERSION`] inside the store directory.
pub const SCHEMA_MARKER_FILE: &str = "schema";

/// Advisory lock file guarding the store directory against a second handle.
pub const STORE_LOCK_FILE: &str = "store.lock";

/// The single fixed slot holding the active video's bytes. The store
/// deliberately has no per-filename keying: one active video at a time.
pub const SLOT_FILE: &str = "current_video.bin";

/// Sidecar describing the slot: content type, length, BLAKE3 checksum.
pub const SLOT_META_FILE: &str = "current_video.json";

/// Backend endpoint that ingests a video for indexing.
pub const API_UPLOAD_PATH: &str = "/api/upload";

/// Backend endpoint that resolves a natural-language query to a timestamp.
pub const API_ASK_PATH: &str = "/api/ask";

/// Multipart field carrying the video bytes on upload.
pub const UPLOAD_FIELD_FILE: &str = "file";

/// Form field carrying the query text on ask.
pub const ASK_FIELD_QUERY: &str = "query";

/// Form field carrying the video identifier on ask.
pub const ASK_FIELD_FILENAME: &str = "filename";

/// URL query parameter a hosting frontend uses to reach the player view.
pub const VIDEO_QUERY_PARAM: &str = "video";
