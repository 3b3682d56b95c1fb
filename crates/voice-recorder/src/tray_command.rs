use crate::{AppError, AppResult, IconImage};

use std::panic::Location;

use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;
use voice_recorder_core::{CommandSet, Notice};

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`),
/// so all tray mutations, notifications and process lifecycle events flow
/// through this enum.
#[derive(Debug, Clone, PartialEq)]
pub enum TrayCommand {
    /// Replace the status line and tooltip.
    SetStatus(String),
    /// Enable exactly these menu commands.
    SetCommands(CommandSet),
    /// Replace the tray icon.
    SetIcon(IconImage),
    /// Show a desktop notification.
    Notify(Notice),
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}

/// Anything that can deliver a [`TrayCommand`] to the UI thread.
pub trait TrayCommandSink {
    /// Queue `command` for the UI thread.
    fn send_tray(&self, command: TrayCommand) -> AppResult<()>;
}

impl TrayCommandSink for EventLoopProxy<TrayCommand> {
    #[track_caller]
    fn send_tray(&self, command: TrayCommand) -> AppResult<()> {
        self.send_event(command)
            .map_err(|_| AppError::ChannelSendFailed {
                message: "Event loop closed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

#[cfg(test)]
impl TrayCommandSink for std::sync::mpsc::Sender<TrayCommand> {
    #[track_caller]
    fn send_tray(&self, command: TrayCommand) -> AppResult<()> {
        self.send(command).map_err(|e| AppError::ChannelSendFailed {
            message: format!("Failed to send tray command: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
