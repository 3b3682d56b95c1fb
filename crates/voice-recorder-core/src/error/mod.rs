use crate::controller::Command;
use crate::session::SessionState;

use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Recorder errors with source location tracking.
#[derive(Error, Debug)]
pub enum RecorderError {
    /// No audio input device found.
    #[error("No microphone found {location}")]
    NoMicrophoneFound {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No audio output device found.
    #[error("No output device found {location}")]
    NoOutputDevice {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Audio device operation failed.
    #[error("Audio device error: {reason} {location}")]
    DeviceError {
        /// Description of the device error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Save or play was requested without a non-empty recording.
    #[error("No recording to {action} {location}")]
    NoRecording {
        /// What the user tried to do ("save", "play").
        action: &'static str,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A command was issued in a state where it is not legal.
    #[error("Cannot {command} while {state} {location}")]
    InvalidTransition {
        /// The rejected command.
        command: Command,
        /// The session state at the time of the command.
        state: SessionState,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A WAV encoder failed to write its file.
    #[error("Failed to write {path:?}: {reason} {location}")]
    EncodeFailed {
        /// Destination path of the failed file.
        path: PathBuf,
        /// Description of the encoder failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// One or more encoders failed during a save.
    #[error("Save failed: {}", join_failures(failures))]
    SaveFailed {
        /// Every encoder failure, in encoder order.
        failures: Vec<RecorderError>,
    },

    /// Unsupported output bit depth.
    #[error("Unsupported bit depth: {bits} {location}")]
    UnsupportedBitDepth {
        /// The rejected bits-per-sample value.
        bits: u16,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl RecorderError {
    /// Whether the error is a user warning rather than a failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, RecorderError::NoRecording { .. })
    }
}

fn join_failures(failures: &[RecorderError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias using [`RecorderError`].
pub type Result<T> = std::result::Result<T, RecorderError>;
