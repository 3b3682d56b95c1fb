use crate::{
    TrayCommand, TrayCommandSink,
    icon_renderer::{ICON_SIZE, plot_icon, state_icon},
};

use std::time::Duration;

use tracing::warn;
use voice_recorder_core::{CommandSet, Notice, RecorderView, SessionState, WaveformPlot};

/// [`RecorderView`] rendered into the system tray.
///
/// Runs on the async runtime thread and forwards every change to the UI
/// thread as a [`TrayCommand`].
pub struct TrayView<S> {
    sink: S,
    state: SessionState,
    status: String,
    elapsed: Option<Duration>,
    plot_visible: bool,
    icon_size: u32,
}

impl<S: TrayCommandSink> TrayView<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            state: SessionState::Idle,
            status: String::new(),
            elapsed: None,
            plot_visible: false,
            icon_size: ICON_SIZE,
        }
    }

    /// Status line with the elapsed time appended when one is shown.
    pub fn label(&self) -> String {
        match self.elapsed {
            Some(elapsed) => format!("{} ({})", self.status, format_elapsed(elapsed)),
            None => self.status.clone(),
        }
    }

    /// Ask the UI thread to exit.
    pub fn request_shutdown(&self) {
        self.send(TrayCommand::Shutdown);
    }

    fn send(&self, command: TrayCommand) {
        if let Err(e) = self.sink.send_tray(command) {
            warn!(error = ?e, "Failed to forward tray command");
        }
    }

    fn send_label(&self) {
        self.send(TrayCommand::SetStatus(self.label()));
    }
}

impl<S: TrayCommandSink> RecorderView for TrayView<S> {
    fn set_status(&mut self, state: SessionState, status: &str) {
        let state_changed = state != self.state;
        self.state = state;
        self.status = status.to_string();
        self.send_label();

        if state_changed && !self.plot_visible {
            self.send(TrayCommand::SetIcon(state_icon(state, self.icon_size)));
        }
    }

    fn set_commands(&mut self, commands: CommandSet) {
        self.send(TrayCommand::SetCommands(commands));
    }

    fn set_elapsed(&mut self, elapsed: Option<Duration>) {
        if elapsed != self.elapsed {
            self.elapsed = elapsed;
            self.send_label();
        }
    }

    fn show_plot(&mut self, plot: Option<&WaveformPlot>) {
        let icon = match plot {
            Some(plot) if plot.frames() > 0 => {
                self.plot_visible = true;
                plot_icon(plot, self.icon_size)
            }
            _ => {
                self.plot_visible = false;
                state_icon(self.state, self.icon_size)
            }
        };
        self.send(TrayCommand::SetIcon(icon));
    }

    fn update_cursor(&mut self, plot: &WaveformPlot) {
        if self.plot_visible {
            self.send(TrayCommand::SetIcon(plot_icon(plot, self.icon_size)));
        }
    }

    fn notify(&mut self, notice: Notice) {
        self.send(TrayCommand::Notify(notice));
    }
}

/// `mm:ss`, with minutes allowed past 59.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
