use crate::{audio::AudioFormat, session::SessionState};

use std::sync::Arc;

use tokio::time::Instant;
use uuid::Uuid;

/// The single in-memory recording.
///
/// A new `Session` replaces the previous one on every Start, so the old
/// buffer is dropped as soon as nothing else holds it.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    format: AudioFormat,
    state: SessionState,
    started_at: Option<Instant>,
    samples: Option<Arc<[f32]>>,
}

impl Session {
    /// An empty, idle session.
    pub fn idle(format: AudioFormat) -> Self {
        Self {
            id: Uuid::nil(),
            format,
            state: SessionState::Idle,
            started_at: None,
            samples: None,
        }
    }

    /// A fresh session in the Recording state.
    pub fn recording(format: AudioFormat, started_at: Instant) -> Self {
        Self {
            id: Uuid::new_v4(),
            format,
            state: SessionState::Recording,
            started_at: Some(started_at),
            samples: None,
        }
    }

    /// Random per recording; nil while idle.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Sample layout of the buffer.
    pub fn format(&self) -> AudioFormat {
        self.format
    }

    /// Lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// When capture started, for recorded sessions.
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// The finished buffer, once the session has left Recording.
    pub fn samples(&self) -> Option<&Arc<[f32]>> {
        self.samples.as_ref()
    }

    /// Finished buffer if it holds at least one sample.
    pub fn playable_samples(&self) -> Option<&Arc<[f32]>> {
        self.samples.as_ref().filter(|s| !s.is_empty())
    }

    /// Whether a non-empty buffer exists.
    pub fn has_recording(&self) -> bool {
        self.playable_samples().is_some()
    }

    /// Number of frames in the finished buffer.
    pub fn frame_count(&self) -> usize {
        self.samples
            .as_ref()
            .map_or(0, |s| self.format.frames(s.len()))
    }

    /// Seal the buffer and move to Ready. Only valid from Recording; the
    /// caller enforces that.
    pub(crate) fn finish(&mut self, samples: Vec<f32>) -> Arc<[f32]> {
        let samples: Arc<[f32]> = samples.into();
        self.samples = Some(Arc::clone(&samples));
        self.state = SessionState::Ready;
        samples
    }

    pub(crate) fn set_state(&mut self, state: SessionState) {
        self.state = state;
    }
}
