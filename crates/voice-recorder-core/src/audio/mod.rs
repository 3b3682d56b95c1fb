mod capture;
mod chunk_buffer;
mod format;
mod playback;

pub use {
    capture::AudioCapturer,
    chunk_buffer::ChunkBuffer,
    format::{AudioFormat, CHANNELS, SAMPLE_RATE},
    playback::AudioPlayer,
};

use crate::CoreResult;

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// Source of captured audio.
///
/// `start` and `stop` are always called as a pair; `stop` closes the stream
/// and returns every sample delivered since `start`, interleaved, in
/// delivery order.
pub trait CaptureDevice {
    /// Open the input stream and begin accumulating chunks.
    fn start(&mut self, format: AudioFormat) -> CoreResult<()>;

    /// Close the input stream and return the concatenated buffer.
    fn stop(&mut self) -> CoreResult<Vec<f32>>;
}

/// Sink for recorded audio.
pub trait PlaybackDevice {
    /// Begin asynchronous output of the whole buffer.
    fn play(&mut self, samples: Arc<[f32]>, format: AudioFormat) -> CoreResult<()>;

    /// Release the output stream once the buffer has been played.
    fn stop(&mut self) {}

    /// Frames-played counter, if the device keeps one.
    fn position(&self) -> Option<PlaybackPosition> {
        None
    }
}

/// Count of frames handed to the output device since playback began.
#[derive(Debug, Clone, Default)]
pub struct PlaybackPosition {
    frames: Arc<AtomicU64>,
}

impl PlaybackPosition {
    /// A counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames played so far.
    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Acquire)
    }

    /// Add `frames` just handed to the device.
    pub fn advance(&self, frames: u64) {
        self.frames.fetch_add(frames, Ordering::AcqRel);
    }

    /// Back to zero for the next playback.
    pub fn reset(&self) {
        self.frames.store(0, Ordering::Release);
    }
}
