use crate::{AppCommand, AppResult, MenuIds, TrayCommand, TrayView, config::Config};

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use tao::event_loop::EventLoopProxy;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument, warn};
use tray_icon::menu::MenuEvent;
use voice_recorder_core::{
    AudioCapturer, AudioPlayer, CaptureDevice, Command, PlaybackDevice, Recorder, RecorderEvent,
    RecorderView, SessionState,
};

/// The recorder as the binary wires it: CPAL devices and a tray view.
pub(crate) type TrayRecorder =
    Recorder<AudioCapturer, AudioPlayer, TrayView<EventLoopProxy<TrayCommand>>>;

/// Main application state.
///
/// Runs on the async runtime thread and owns the recorder. The recorder's
/// view forwards tray updates to the main thread because `TrayIcon` is
/// `!Send` and must remain on the UI thread.
pub struct App {
    pub(crate) recorder: TrayRecorder,
    pub(crate) events_rx: mpsc::Receiver<RecorderEvent>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
    pub(crate) menu_ids: MenuIds,
    /// Re-read before every save for `[recording].filename_base`.
    pub(crate) config_path: PathBuf,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Voice Recorder starting");

        // MenuEvent::receiver() is a crossbeam receiver with a blocking
        // recv(), so one blocking task forwards events without polling.
        // It exits on the first send after menu_event_rx is dropped.
        let (menu_event_tx, mut menu_event_rx) = mpsc::channel(32);
        let menu_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if menu_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            let command = tokio::select! {
                Some(event) = menu_event_rx.recv() => {
                    match self.menu_ids.command_for(&event.id) {
                        Some(command) => command,
                        None => {
                            debug!(menu_id = ?event.id, "Ignoring unknown menu item");
                            continue;
                        }
                    }
                }

                Some(command) = self.command_rx.recv() => command,

                Some(event) = self.events_rx.recv() => {
                    self.recorder.handle_event(event);
                    continue;
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            };

            if command == AppCommand::Shutdown {
                info!("Shutdown requested");
                break;
            }
            self.dispatch(command);
        }

        drop(menu_event_rx);

        match tokio::time::timeout(Duration::from_secs(1), menu_handle).await {
            Ok(Ok(())) => info!("Menu event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Menu event forwarder task panicked"),
            Err(_) => info!(
                "Menu event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        if self.recorder.state() == SessionState::Recording {
            info!("Discarding in-progress recording on exit");
        }

        let _ = self.shutdown_tx.send(true);
        self.recorder.view().request_shutdown();
        info!("Voice Recorder shut down successfully");

        Ok(())
    }

    #[instrument(skip(self))]
    fn dispatch(&mut self, command: AppCommand) {
        match command {
            AppCommand::Recorder(Command::Save) => {
                reload_filename_base(&mut self.recorder, &self.config_path);
                self.recorder.execute(Command::Save);
            }
            AppCommand::Recorder(command) => self.recorder.execute(command),
            AppCommand::ToggleRecording => self.recorder.toggle_recording(),
            AppCommand::Shutdown => {}
        }
    }
}

/// Pick up a `[recording].filename_base` edited while the app is running.
///
/// The tray has no text entry, so the config file is the filename field.
/// If the file cannot be read the previous base is kept.
pub(crate) fn reload_filename_base<C, P, V>(recorder: &mut Recorder<C, P, V>, config_path: &Path)
where
    C: CaptureDevice,
    P: PlaybackDevice,
    V: RecorderView,
{
    match Config::read_from(config_path) {
        Ok(config) => {
            if config.recording.filename_base != recorder.filename_base() {
                info!(
                    filename_base = %config.recording.filename_base,
                    "Filename base changed"
                );
            }
            recorder.set_filename_base(config.recording.filename_base);
        }
        Err(e) => warn!(
            error = ?e,
            filename_base = %recorder.filename_base(),
            "Could not re-read config, keeping filename base"
        ),
    }
}
