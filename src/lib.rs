#![deny(clippy::all, clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![allow(clippy::module_name_repetitions)]
//
// Documentation lints: internal/self-documenting functions don't need
// extensive docs. Public APIs should still have proper documentation.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)]
//
// Cast safety: casts here are bounded by real-world constraints (blob sizes,
// playback offsets) and reviewed at the call site.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
//
// Ergonomics trade-offs:
#![allow(clippy::needless_pass_by_value)] // Builders take owned values intentionally
#![allow(clippy::return_self_not_must_use)]

//! Core library for SceneSeek: a local-first video cache with
//! natural-language seek.
//!
//! A video is uploaded once; the bytes stay client-side in a single-slot
//! durable store while the backend indexes them. Afterwards the player is
//! driven by natural-language queries that resolve to timestamps: each
//! answer is recorded in a replayable history log, and found answers seek
//! the bound playback surface. Playback never round-trips through the
//! backend; the store owns the only durable copy of the bytes.

/// The sceneseek-core crate version (matches `Cargo.toml`).
pub const SCENESEEK_CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod backend;
pub mod constants;
pub mod error;
pub mod playback;
pub mod session;
pub mod store;
pub mod types;

pub use backend::{HttpBackend, HttpBackendBuilder, IndexingBackend, UploadReceipt};
pub use error::{Result, SceneseekError};
pub use playback::{MediaHandle, PlaybackStartRejected, PlaybackSurface};
pub use session::{
    BootstrapOutcome, HistoryLog, PlayerSession, QuerySubmission, RedirectReason,
    UploadCoordinator, UploadPhase, ViewTransition,
};
pub use store::{MediaCache, MediaStore, StoredVideo};
pub use types::{HistoryEntry, QueryAnswer, StoreOptions, VideoIdentifier};
