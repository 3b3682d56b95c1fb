use voice_recorder_core::Command;

/// Commands sent from the tray menu and hotkey handler to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Run a recorder command.
    Recorder(Command),
    /// Start if not recording, stop if recording.
    ToggleRecording,
    /// Request application shutdown.
    Shutdown,
}
