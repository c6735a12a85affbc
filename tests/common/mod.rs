//! Shared fakes for exercising the upload and player flows without a
//! network or a real player widget.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use sceneseek_core::{
    IndexingBackend, MediaCache, MediaHandle, PlaybackStartRejected, PlaybackSurface, QueryAnswer,
    Result, SceneseekError, StoredVideo, UploadReceipt, VideoIdentifier,
};
use uuid::Uuid;

/// In-memory single-slot cache mirroring `MediaStore` semantics.
#[derive(Default)]
pub struct InMemoryCache {
    pub slot: Option<(Vec<u8>, String)>,
    pub puts: usize,
    pub gets: std::cell::Cell<usize>,
}

impl InMemoryCache {
    pub fn with_video(bytes: &[u8], content_type: &str) -> Self {
        Self {
            slot: Some((bytes.to_vec(), content_type.to_string())),
            puts: 0,
            gets: std::cell::Cell::new(0),
        }
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}

impl MediaCache for InMemoryCache {
    fn put(&mut self, bytes: &[u8], content_type: &str) -> Result<()> {
        self.puts += 1;
        self.slot = Some((bytes.to_vec(), content_type.to_string()));
        Ok(())
    }

    fn get(&self) -> Result<Option<StoredVideo>> {
        self.gets.set(self.gets.get() + 1);
        Ok(self.slot.as_ref().map(|(bytes, content_type)| StoredVideo {
            bytes: bytes.clone(),
            content_type: content_type.clone(),
        }))
    }
}

/// Cache whose writes always fail, simulating quota exhaustion.
pub struct FailingCache;

impl MediaCache for FailingCache {
    fn put(&mut self, _bytes: &[u8], _content_type: &str) -> Result<()> {
        Err(SceneseekError::StorageWrite {
            reason: "simulated quota exhaustion".to_string(),
        })
    }

    fn get(&self) -> Result<Option<StoredVideo>> {
        Ok(None)
    }
}

pub enum UploadScript {
    Success(&'static str),
    Fail(&'static str),
}

pub enum AskScript {
    Found(f64, &'static str),
    NotFound,
    Fail(&'static str),
}

#[derive(Default)]
pub struct BackendState {
    pub upload_calls: usize,
    pub ask_calls: usize,
    pub uploaded: Vec<(String, Vec<u8>)>,
    pub asked: Vec<(String, String)>,
    pub upload_script: VecDeque<UploadScript>,
    pub ask_script: VecDeque<AskScript>,
}

/// Backend fake that replays scripted responses and records every call.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    pub state: Rc<RefCell<BackendState>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script_upload(self, script: UploadScript) -> Self {
        self.state.borrow_mut().upload_script.push_back(script);
        self
    }

    pub fn script_ask(self, script: AskScript) -> Self {
        self.state.borrow_mut().ask_script.push_back(script);
        self
    }

    pub fn upload_calls(&self) -> usize {
        self.state.borrow().upload_calls
    }

    pub fn ask_calls(&self) -> usize {
        self.state.borrow().ask_calls
    }
}

impl IndexingBackend for ScriptedBackend {
    fn upload(&self, filename: &str, bytes: &[u8]) -> Result<UploadReceipt> {
        let mut state = self.state.borrow_mut();
        state.upload_calls += 1;
        state.uploaded.push((filename.to_string(), bytes.to_vec()));
        match state.upload_script.pop_front().expect("unscripted upload") {
            UploadScript::Success(name) => Ok(UploadReceipt {
                identifier: VideoIdentifier::new(name)?,
            }),
            UploadScript::Fail(reason) => Err(SceneseekError::UploadFailed {
                reason: reason.to_string(),
            }),
        }
    }

    fn ask(&self, query: &str, identifier: &VideoIdentifier) -> Result<QueryAnswer> {
        let mut state = self.state.borrow_mut();
        state.ask_calls += 1;
        state
            .asked
            .push((query.to_string(), identifier.to_string()));
        match state.ask_script.pop_front().expect("unscripted ask") {
            AskScript::Found(start, answer) => Ok(QueryAnswer::found_at(start, answer)),
            AskScript::NotFound => Ok(QueryAnswer::not_found()),
            AskScript::Fail(reason) => Err(SceneseekError::QueryFailed {
                reason: reason.to_string(),
            }),
        }
    }
}

#[derive(Default)]
pub struct SurfaceState {
    pub bound: Vec<Uuid>,
    pub positions: Vec<f64>,
    pub playing: bool,
    pub play_attempts: usize,
    pub reject_play: bool,
}

/// Playback surface fake with externally inspectable state.
#[derive(Clone, Default)]
pub struct FakeSurface {
    pub state: Rc<RefCell<SurfaceState>>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting_play() -> Self {
        let surface = Self::default();
        surface.state.borrow_mut().reject_play = true;
        surface
    }

    pub fn position(&self) -> Option<f64> {
        self.state.borrow().positions.last().copied()
    }

    pub fn playing(&self) -> bool {
        self.state.borrow().playing
    }
}

impl PlaybackSurface for FakeSurface {
    fn bind(&mut self, handle: &MediaHandle) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.bound.push(handle.id());
        state.playing = false;
        Ok(())
    }

    fn set_position(&mut self, seconds: f64) {
        self.state.borrow_mut().positions.push(seconds);
    }

    fn play(&mut self) -> std::result::Result<(), PlaybackStartRejected> {
        let mut state = self.state.borrow_mut();
        state.play_attempts += 1;
        if state.reject_play {
            Err(PlaybackStartRejected)
        } else {
            state.playing = true;
            Ok(())
        }
    }
}
