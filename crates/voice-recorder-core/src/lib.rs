//! Voice Recorder Core Library
//!
//! Record/save/playback state machine for a desktop voice recorder, with
//! CPAL capture and playback, two WAV encoders and a waveform plot with a
//! playback cursor.
//!
//! # Example
//!
//! ```no_run
//! use voice_recorder_core::{
//!     AudioCapturer, AudioPlayer, Command, CommandSet, CoreResult, FloatWavEncoder, Notice,
//!     OutputTarget, Recorder, RecorderSettings, RecorderView, RecordingSaver, SessionState,
//!     WaveformPlot,
//! };
//!
//! use std::time::Duration;
//!
//! struct LogView;
//!
//! impl RecorderView for LogView {
//!     fn set_status(&mut self, _: SessionState, status: &str) { println!("{status}") }
//!     fn set_commands(&mut self, _: CommandSet) {}
//!     fn set_elapsed(&mut self, _: Option<Duration>) {}
//!     fn show_plot(&mut self, _: Option<&WaveformPlot>) {}
//!     fn update_cursor(&mut self, _: &WaveformPlot) {}
//!     fn notify(&mut self, notice: Notice) { println!("{}", notice.message) }
//! }
//!
//! #[tokio::main]
//! async fn main() -> CoreResult<()> {
//!     let (events_tx, _events_rx) = tokio::sync::mpsc::channel(32);
//!     let saver = RecordingSaver::new(OutputTarget::new("."), FloatWavEncoder::new(16)?);
//!     let mut recorder = Recorder::new(
//!         AudioCapturer::new()?,
//!         AudioPlayer::new()?,
//!         LogView,
//!         saver,
//!         RecorderSettings::default(),
//!         events_tx,
//!     );
//!
//!     recorder.start()?;
//!     tokio::time::sleep(Duration::from_secs(3)).await;
//!     recorder.stop()?;
//!     recorder.execute(Command::Save);
//!     Ok(())
//! }
//! ```

mod audio;
mod controller;
mod encode;
mod error;
mod session;
mod ticker;
mod waveform;

pub use {
    audio::{
        AudioCapturer, AudioFormat, AudioPlayer, CHANNELS, CaptureDevice, ChunkBuffer,
        PlaybackDevice, PlaybackPosition, SAMPLE_RATE,
    },
    controller::{
        Command, CommandSet, Notice, NoticeLevel, Recorder, RecorderEvent, RecorderSettings,
        RecorderView,
    },
    encode::{
        DEFAULT_BASE_NAME, FloatWavEncoder, OutputTarget, PcmWavEncoder, RecordingSaver,
        SUPPORTED_BIT_DEPTHS,
        pcm::{PCM16_FULL_SCALE, to_pcm16, to_pcm16_buffer},
    },
    error::{RecorderError, Result as CoreResult},
    session::{Session, SessionState},
    ticker::{
        CURSOR_TICK, ELAPSED_TICK, TickerHandle, spawn_cursor_ticker, spawn_elapsed_ticker,
    },
    waveform::{
        ColumnEnvelope, CursorSource, DEFAULT_LOOKAHEAD, DeviceClock, PlaybackClock, WallClock,
        WaveformPlot, cursor_index,
    },
};

#[cfg(test)]
mod tests;
