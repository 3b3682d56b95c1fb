//! Global hotkey handler.
//!
//! Registers CTRL+SHIFT+R as a global hotkey that toggles recording. Presses
//! are forwarded to the application as [`AppCommand::ToggleRecording`]; the
//! recorder decides whether that means start or stop.

use crate::{AppCommand, AppError, AppResult};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    hotkey::{Code, HotKey, Modifiers},
};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

/// Forwards presses of the registered hotkey to the application.
pub struct HotkeyHandler {
    hotkey_id: u32,
    command_tx: mpsc::Sender<AppCommand>,
}

impl HotkeyHandler {
    /// Register CTRL+SHIFT+R as the global hotkey.
    ///
    /// Must be called on a thread with a message pump (e.g. the main thread
    /// running a `tao` event loop) so that `WM_HOTKEY` messages are
    /// dispatched on Windows. The returned [`GlobalHotKeyManager`] must be
    /// kept alive on that thread for the hotkey to remain registered.
    #[track_caller]
    #[instrument]
    pub fn register_hotkey() -> AppResult<(GlobalHotKeyManager, u32)> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to create manager: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let hotkey = HotKey::new(Some(Modifiers::CONTROL | Modifiers::SHIFT), Code::KeyR);

        manager
            .register(hotkey)
            .map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to register CTRL+SHIFT+R: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(hotkey = "CTRL+SHIFT+R", "Global hotkey registered");

        Ok((manager, hotkey.id()))
    }

    /// Create a handler for a previously registered hotkey.
    pub fn new(hotkey_id: u32, command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self {
            hotkey_id,
            command_tx,
        }
    }

    /// Command for a hotkey event. Only presses of our hotkey count;
    /// releases would otherwise toggle a second time.
    pub fn command_for(&self, id: u32, state: HotKeyState) -> Option<AppCommand> {
        (id == self.hotkey_id && state == HotKeyState::Pressed)
            .then_some(AppCommand::ToggleRecording)
    }

    /// Run the hotkey handler event loop until a shutdown signal arrives.
    #[instrument(skip(self))]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let receiver = GlobalHotKeyEvent::receiver().clone();
        let (event_tx, mut event_rx) = mpsc::channel(32);

        // GlobalHotKeyEvent::receiver() is a crossbeam receiver with a
        // blocking recv(), so one blocking task forwards events without
        // polling. It exits on the first send after event_rx is dropped.
        let handle = tokio::task::spawn_blocking(move || {
            while let Ok(event) = receiver.recv() {
                if event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Hotkey handler shutting down");
                    break;
                }
                Some(event) = event_rx.recv() => {
                    if let Some(command) = self.command_for(event.id, event.state) {
                        self.forward(command).await?;
                    }
                }
            }
        }

        drop(event_rx);

        // The blocking task may sit in recv() until the next hotkey event.
        // The runtime cleans it up on exit.
        match tokio::time::timeout(Duration::from_secs(1), handle).await {
            Ok(Ok(())) => debug!("Hotkey event forwarder stopped cleanly"),
            Ok(Err(e)) => warn!(error = ?e, "Hotkey event forwarder task panicked"),
            Err(_) => debug!(
                "Hotkey event forwarder did not stop within timeout, \
                   will be cleaned up on exit"
            ),
        }

        Ok(())
    }

    #[track_caller]
    async fn forward(&self, command: AppCommand) -> AppResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send {:?}: {}", command, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(command = ?command, "Hotkey command forwarded");

        Ok(())
    }
}
