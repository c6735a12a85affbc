//! Integration tests for the upload coordinator.
//! Tests: cache-before-network ordering, retry semantics, phase tracking,
//! handoff into the player view.

mod common;

use common::{FailingCache, InMemoryCache, ScriptedBackend, UploadScript};
use sceneseek_core::{
    BootstrapOutcome, MediaCache, MediaStore, PlayerSession, SceneseekError, UploadCoordinator,
    UploadPhase, ViewTransition,
};
use tempfile::TempDir;

#[test]
fn full_sequence_caches_then_indexes_then_redirects() {
    // Scenario A: cache locally, index, navigate with the canonical name.
    let mut cache = InMemoryCache::default();
    let backend = ScriptedBackend::new().script_upload(UploadScript::Success("lecture.mp4"));

    let transition = {
        let mut coordinator = UploadCoordinator::new(&mut cache, &backend);
        assert_eq!(coordinator.phase(), UploadPhase::Idle);
        let transition = coordinator
            .submit("lecture.mp4", b"video bytes", "video/mp4")
            .unwrap();
        assert_eq!(coordinator.phase(), UploadPhase::Idle);
        transition
    };

    match transition {
        ViewTransition::Player { video } => assert_eq!(video.as_str(), "lecture.mp4"),
        other => panic!("expected player transition, got {other:?}"),
    }
    assert_eq!(backend.upload_calls(), 1);

    let cached = cache.get().unwrap().unwrap();
    assert_eq!(cached.bytes, b"video bytes");
    assert_eq!(cached.content_type, "video/mp4");
}

#[test]
fn storage_failure_aborts_before_any_network_call() {
    // P2: a simulated storage failure must produce zero network calls.
    let mut cache = FailingCache;
    let backend = ScriptedBackend::new();
    let mut coordinator = UploadCoordinator::new(&mut cache, &backend);

    let err = coordinator
        .submit("lecture.mp4", b"video bytes", "video/mp4")
        .unwrap_err();
    assert!(matches!(err, SceneseekError::StorageWrite { .. }));
    assert!(!err.is_recoverable());
    assert_eq!(coordinator.phase(), UploadPhase::Failed);
    assert_eq!(backend.upload_calls(), 0);
}

#[test]
fn indexing_failure_leaves_the_cache_reusable_for_retry() {
    let mut cache = InMemoryCache::default();
    let backend = ScriptedBackend::new()
        .script_upload(UploadScript::Fail("backend down"))
        .script_upload(UploadScript::Success("lecture.mp4"));
    let mut coordinator = UploadCoordinator::new(&mut cache, &backend);

    let err = coordinator
        .submit("lecture.mp4", b"video bytes", "video/mp4")
        .unwrap_err();
    assert!(matches!(err, SceneseekError::UploadFailed { .. }));
    assert!(err.is_recoverable());
    assert_eq!(coordinator.phase(), UploadPhase::Failed);

    // Retry re-runs only the indexing step, reusing the cached bytes.
    let transition = coordinator.retry_index("lecture.mp4").unwrap();
    assert!(matches!(transition, ViewTransition::Player { .. }));
    assert_eq!(coordinator.phase(), UploadPhase::Idle);

    let state = backend.state.borrow();
    assert_eq!(state.upload_calls, 2);
    assert_eq!(state.uploaded[1].1, b"video bytes");
}

#[test]
fn retry_without_a_cached_blob_fails_without_network() {
    let mut cache = InMemoryCache::default();
    let backend = ScriptedBackend::new();
    let mut coordinator = UploadCoordinator::new(&mut cache, &backend);

    let err = coordinator.retry_index("lecture.mp4").unwrap_err();
    assert!(matches!(err, SceneseekError::UploadFailed { .. }));
    assert_eq!(backend.upload_calls(), 0);
}

#[test]
fn empty_selection_is_rejected_up_front() {
    let mut cache = InMemoryCache::default();
    let backend = ScriptedBackend::new();
    let mut coordinator = UploadCoordinator::new(&mut cache, &backend);

    assert!(coordinator.submit("", b"bytes", "video/mp4").is_err());
    assert!(coordinator.submit("lecture.mp4", b"", "video/mp4").is_err());
    drop(coordinator);

    assert_eq!(cache.puts, 0);
    assert_eq!(backend.upload_calls(), 0);
}

#[test]
fn backend_canonical_filename_is_authoritative() {
    let mut cache = InMemoryCache::default();
    let backend = ScriptedBackend::new().script_upload(UploadScript::Success("My_Lecture.mp4"));
    let mut coordinator = UploadCoordinator::new(&mut cache, &backend);

    let transition = coordinator
        .submit("My Lecture.mp4", b"video bytes", "video/mp4")
        .unwrap();
    match transition {
        ViewTransition::Player { video } => assert_eq!(video.as_str(), "My_Lecture.mp4"),
        other => panic!("expected player transition, got {other:?}"),
    }
}

#[test]
fn upload_then_player_bootstrap_plays_from_the_durable_store() {
    // End-to-end handoff over the real store: the player view reads the
    // bytes the upload view cached, without any backend fetch.
    let dir = TempDir::new().unwrap();
    let mut store = MediaStore::open(dir.path()).unwrap();
    let backend = ScriptedBackend::new().script_upload(UploadScript::Success("lecture.mp4"));

    let transition = UploadCoordinator::new(&mut store, &backend)
        .submit("lecture.mp4", b"cached payload", "video/mp4")
        .unwrap();
    let ViewTransition::Player { video } = transition else {
        panic!("expected player transition");
    };

    let surface = common::FakeSurface::new();
    let outcome = PlayerSession::bootstrap(
        &store,
        backend.clone(),
        surface.clone(),
        Some(video.as_str()),
    )
    .unwrap();
    let BootstrapOutcome::Ready(session) = outcome else {
        panic!("expected a ready session");
    };

    assert_eq!(session.identifier().as_str(), "lecture.mp4");
    let handle = session.media_handle().unwrap();
    assert_eq!(std::fs::read(handle.path()).unwrap(), b"cached payload");
    assert_eq!(surface.state.borrow().bound.len(), 1);
}
