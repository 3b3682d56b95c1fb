use crate::{controller::CommandSet, session::SessionState, waveform::WaveformPlot};

use std::time::Duration;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// A command succeeded.
    Info,
    /// A command was not applicable, e.g. nothing to save.
    Warning,
    /// A command failed.
    Error,
}

/// A modal message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Short heading.
    pub title: String,
    /// Body text.
    pub message: String,
}

impl Notice {
    /// Titled "Success".
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    /// Titled "Warning".
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: "Warning".to_string(),
            message: message.into(),
        }
    }

    /// Titled "Error".
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

/// The user-facing surface the recorder drives.
///
/// Implementations only render; they never call back into the recorder.
pub trait RecorderView {
    /// Replace the status label for the session's current state.
    fn set_status(&mut self, state: SessionState, status: &str);

    /// Enable exactly the commands in `commands`.
    fn set_commands(&mut self, commands: CommandSet);

    /// Update the elapsed-time label. `None` clears it.
    fn set_elapsed(&mut self, elapsed: Option<Duration>);

    /// Replace the plotted waveform. `None` clears the plot.
    fn show_plot(&mut self, plot: Option<&WaveformPlot>);

    /// The cursor or visible range of the current plot moved.
    fn update_cursor(&mut self, plot: &WaveformPlot);

    /// Show a modal notice.
    fn notify(&mut self, notice: Notice);
}
