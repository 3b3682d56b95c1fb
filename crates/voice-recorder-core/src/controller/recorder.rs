use crate::{
    CoreResult, RecorderError,
    audio::{AudioFormat, CaptureDevice, PlaybackDevice},
    controller::{Command, CommandSet, Notice, RecorderEvent, RecorderView},
    encode::RecordingSaver,
    session::{Session, SessionState},
    ticker::{CURSOR_TICK, ELAPSED_TICK, TickerHandle, spawn_cursor_ticker, spawn_elapsed_ticker},
    waveform::{CursorSource, DEFAULT_LOOKAHEAD, DeviceClock, WallClock, WaveformPlot},
};

use std::{panic::Location, path::PathBuf, sync::Arc, time::Duration};

use error_location::ErrorLocation;
use tokio::{sync::mpsc, time::Instant};
use tracing::{debug, error, info, instrument, warn};

const STATUS_IDLE: &str = "Click 'Start' to start recording.";
const STATUS_RECORDING: &str = "Recording... Press 'Stop' to finish.";
const STATUS_STOPPED: &str = "Recording stopped.";
const STATUS_EMPTY: &str = "Recording stopped. No audio was captured.";
const STATUS_PLAYING: &str = "Playing...";
const STATUS_PLAYED: &str = "Playback finished.";

/// Timing knobs for the recorder's tickers and plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecorderSettings {
    /// Cadence of the elapsed-time label.
    pub elapsed_interval: Duration,
    /// Cadence of the playback cursor animation.
    pub cursor_interval: Duration,
    /// Cursor travel before the plot starts scrolling.
    pub lookahead: Duration,
    /// What drives the playback cursor.
    pub cursor_source: CursorSource,
}

impl Default for RecorderSettings {
    fn default() -> Self {
        Self {
            elapsed_interval: ELAPSED_TICK,
            cursor_interval: CURSOR_TICK,
            lookahead: DEFAULT_LOOKAHEAD,
            cursor_source: CursorSource::WallClock,
        }
    }
}

/// Record/save/playback state machine.
///
/// Owns the single live [`Session`] and is the only writer of its state.
/// Background tickers report through the `events` channel; the owner feeds
/// those back in with [`Recorder::handle_event`].
///
/// # Thread Safety
///
/// `Recorder` is NOT thread-safe. Keep it on one task and route commands
/// and ticker events to that task.
pub struct Recorder<C, P, V> {
    capture: C,
    playback: P,
    view: V,
    saver: RecordingSaver,
    settings: RecorderSettings,
    format: AudioFormat,
    session: Session,
    plot: Option<WaveformPlot>,
    filename_base: String,
    status: &'static str,
    elapsed_ticker: Option<TickerHandle>,
    cursor_ticker: Option<TickerHandle>,
    events: mpsc::Sender<RecorderEvent>,
}

impl<C, P, V> Recorder<C, P, V>
where
    C: CaptureDevice,
    P: PlaybackDevice,
    V: RecorderView,
{
    /// Create an idle recorder and paint the initial view.
    pub fn new(
        capture: C,
        playback: P,
        view: V,
        saver: RecordingSaver,
        settings: RecorderSettings,
        events: mpsc::Sender<RecorderEvent>,
    ) -> Self {
        let format = AudioFormat::default();
        let mut recorder = Self {
            capture,
            playback,
            view,
            saver,
            settings,
            format,
            session: Session::idle(format),
            plot: None,
            filename_base: String::new(),
            status: STATUS_IDLE,
            elapsed_ticker: None,
            cursor_ticker: None,
            events,
        };
        recorder.refresh_view();
        recorder
    }

    /// State of the live session.
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// The live session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Waveform of the finished recording, if any.
    pub fn plot(&self) -> Option<&WaveformPlot> {
        self.plot.as_ref()
    }

    /// The view being driven.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        self.status
    }

    /// Commands legal in the current state.
    pub fn available_commands(&self) -> CommandSet {
        CommandSet::for_state(self.session.state(), self.session.has_recording())
    }

    /// Contents of the filename field. Blank means the default base name.
    pub fn set_filename_base(&mut self, base: impl Into<String>) {
        self.filename_base = base.into();
    }

    /// Base name the next save will use, as entered.
    pub fn filename_base(&self) -> &str {
        &self.filename_base
    }

    /// Run `command` and report the outcome to the view.
    ///
    /// This is the command boundary: failures become notices (warnings for
    /// a missing recording, errors for everything else) and never escape.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) {
        let result = match command {
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::Save => self.save().map(|_| ()),
            Command::Play => self.play(),
        };

        if let Err(e) = result {
            self.report(e);
        }
    }

    /// Start if idle/ready, stop if recording.
    pub fn toggle_recording(&mut self) {
        match self.session.state() {
            SessionState::Recording => self.execute(Command::Stop),
            _ => self.execute(Command::Start),
        }
    }

    /// Idle/Ready → Recording.
    ///
    /// Opens the capture stream first; if that fails the previous session
    /// and its buffer are left untouched.
    ///
    /// # Errors
    ///
    /// [`RecorderError::InvalidTransition`] unless idle or ready, or the
    /// capture device's error.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start(&mut self) -> CoreResult<()> {
        self.ensure_legal(Command::Start)?;

        self.capture.start(self.format)?;

        // An output stream from the previous take must not outlive it.
        self.playback.stop();
        // Replacing the session drops the previous buffer; the plot and
        // cursor ticker are the only other holders.
        self.cursor_ticker = None;
        self.plot = None;
        self.session = Session::recording(self.format, Instant::now());

        if let Some(started_at) = self.session.started_at() {
            self.elapsed_ticker = Some(spawn_elapsed_ticker(
                self.session.id(),
                started_at,
                self.settings.elapsed_interval,
                self.events.clone(),
            ));
        }

        self.status = STATUS_RECORDING;
        self.view.show_plot(None);
        self.view.set_elapsed(Some(Duration::ZERO));
        self.refresh_view();

        info!(session_id = %self.session.id(), "Recording started");

        Ok(())
    }

    /// Recording → Ready.
    ///
    /// # Errors
    ///
    /// [`RecorderError::InvalidTransition`] unless recording. If the capture
    /// device fails to close, the take is discarded, the session returns
    /// to Idle and the device error is returned.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn stop(&mut self) -> CoreResult<()> {
        self.ensure_legal(Command::Stop)?;

        if let Some(ticker) = self.elapsed_ticker.take() {
            ticker.cancel();
        }
        let elapsed = self.session.started_at().map(|t| t.elapsed());

        let samples = match self.capture.stop() {
            Ok(samples) => samples,
            Err(e) => {
                error!(session_id = %self.session.id(), error = ?e, "Failed to stop capture");
                self.session = Session::idle(self.format);
                self.status = STATUS_IDLE;
                self.view.set_elapsed(None);
                self.refresh_view();
                return Err(e);
            }
        };

        let samples = self.session.finish(samples);
        self.view.set_elapsed(elapsed);

        let plot = WaveformPlot::new(samples, self.format, self.lookahead_frames());
        self.view.show_plot(Some(&plot));
        self.status = if plot.frames() == 0 {
            STATUS_EMPTY
        } else {
            STATUS_STOPPED
        };
        self.plot = Some(plot);
        self.refresh_view();

        info!(
            session_id = %self.session.id(),
            frames = self.session.frame_count(),
            duration_ms = elapsed.unwrap_or_default().as_millis(),
            "Recording stopped"
        );

        Ok(())
    }

    /// Write both WAV files for the finished recording.
    ///
    /// The session is unaffected whether or not the save succeeds, so a
    /// failed save can be retried.
    ///
    /// # Errors
    ///
    /// [`RecorderError::NoRecording`] without a non-empty buffer,
    /// [`RecorderError::InvalidTransition`] while recording, or
    /// [`RecorderError::SaveFailed`].
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save(&mut self) -> CoreResult<Vec<PathBuf>> {
        let samples = self.recording_for(Command::Save)?;

        let files = self.saver.save(&samples, self.format, &self.filename_base)?;

        self.view.notify(Notice::info("Recording saved successfully."));

        Ok(files)
    }

    /// Ready → Playing.
    ///
    /// # Errors
    ///
    /// [`RecorderError::NoRecording`] without a non-empty buffer,
    /// [`RecorderError::InvalidTransition`] unless ready, or the playback
    /// device's error.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn play(&mut self) -> CoreResult<()> {
        let samples = self.recording_for(Command::Play)?;
        self.ensure_legal(Command::Play)?;

        self.playback.play(samples, self.format)?;
        self.session.set_state(SessionState::Playing);

        let total_frames = self.session.frame_count();
        let session_id = self.session.id();
        let sample_rate = self.format.sample_rate;
        let interval = self.settings.cursor_interval;

        let device_position = match self.settings.cursor_source {
            CursorSource::Device => self.playback.position(),
            CursorSource::WallClock => None,
        };
        self.cursor_ticker = Some(match device_position {
            Some(position) => spawn_cursor_ticker(
                session_id,
                DeviceClock::new(position),
                sample_rate,
                total_frames,
                interval,
                self.events.clone(),
            ),
            None => spawn_cursor_ticker(
                session_id,
                WallClock::start_now(),
                sample_rate,
                total_frames,
                interval,
                self.events.clone(),
            ),
        });

        if let Some(plot) = self.plot.as_mut() {
            plot.begin_playback();
            self.view.update_cursor(plot);
        }
        self.status = STATUS_PLAYING;
        self.refresh_view();

        info!(session_id = %session_id, total_frames, "Playback started");

        Ok(())
    }

    /// Apply a ticker event. Events from another session, or that arrive
    /// after the state they belong to has ended, are dropped.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: RecorderEvent) {
        let current = self.session.id();
        let state = self.session.state();

        match event {
            RecorderEvent::Elapsed {
                session_id,
                elapsed,
            } if session_id == current && state == SessionState::Recording => {
                self.view.set_elapsed(Some(elapsed));
            }
            RecorderEvent::CursorMoved { session_id, frame }
                if session_id == current && state == SessionState::Playing =>
            {
                if let Some(plot) = self.plot.as_mut() {
                    plot.set_cursor(frame);
                    self.view.update_cursor(plot);
                }
            }
            RecorderEvent::PlaybackFinished { session_id }
                if session_id == current && state == SessionState::Playing =>
            {
                self.finish_playback();
            }
            stale => {
                debug!(event = ?stale, state = %state, "Dropping stale recorder event");
            }
        }
    }

    fn finish_playback(&mut self) {
        self.cursor_ticker = None;
        self.playback.stop();
        self.session.set_state(SessionState::Ready);

        if let Some(plot) = self.plot.as_mut() {
            plot.reset_view();
            self.view.update_cursor(plot);
        }
        self.status = STATUS_PLAYED;
        self.refresh_view();

        info!(session_id = %self.session.id(), "Playback finished");
    }

    /// The finished buffer for save/play, or the matching rejection.
    #[track_caller]
    fn recording_for(&self, command: Command) -> CoreResult<Arc<[f32]>> {
        if self.session.state() == SessionState::Recording {
            return Err(RecorderError::InvalidTransition {
                command,
                state: SessionState::Recording,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.session
            .playable_samples()
            .cloned()
            .ok_or_else(|| RecorderError::NoRecording {
                action: match command {
                    Command::Play => "play",
                    _ => "save",
                },
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn ensure_legal(&self, command: Command) -> CoreResult<()> {
        if self.available_commands().contains(command) {
            return Ok(());
        }
        Err(RecorderError::InvalidTransition {
            command,
            state: self.session.state(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn report(&mut self, e: RecorderError) {
        if e.is_warning() {
            warn!(error = %e, "Command rejected");
            let message = match &e {
                RecorderError::NoRecording { action, .. } => format!("No recording to {}.", action),
                other => other.to_string(),
            };
            self.view.notify(Notice::warning(message));
        } else {
            error!(error = ?e, "Command failed");
            self.view.notify(Notice::error(e.to_string()));
        }
    }

    fn refresh_view(&mut self) {
        self.view.set_status(self.session.state(), self.status);
        self.view.set_commands(self.available_commands());
    }

    fn lookahead_frames(&self) -> usize {
        self.format.frames_in(self.settings.lookahead)
    }
}
