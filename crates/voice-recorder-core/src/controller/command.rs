use crate::session::SessionState;

use std::fmt;

/// User commands accepted by the recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Begin a new recording.
    Start,
    /// Finish the current recording.
    Stop,
    /// Write the recording to disk.
    Save,
    /// Play the recording back.
    Play,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Command; 4] = [Command::Start, Command::Stop, Command::Save, Command::Play];
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Command::Start => "start",
            Command::Stop => "stop",
            Command::Save => "save",
            Command::Play => "play",
        };
        f.write_str(s)
    }
}

/// Which commands are currently legal. Drives enabled/disabled controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandSet {
    /// [`Command::Start`] is legal.
    pub start: bool,
    /// [`Command::Stop`] is legal.
    pub stop: bool,
    /// [`Command::Save`] is legal.
    pub save: bool,
    /// [`Command::Play`] is legal.
    pub play: bool,
}

impl CommandSet {
    /// Legal commands for `state`, given whether a non-empty recording exists.
    pub fn for_state(state: SessionState, has_recording: bool) -> Self {
        match state {
            SessionState::Idle => Self {
                start: true,
                ..Self::default()
            },
            SessionState::Recording => Self {
                stop: true,
                ..Self::default()
            },
            SessionState::Ready => Self {
                start: true,
                stop: false,
                save: has_recording,
                play: has_recording,
            },
            SessionState::Playing => Self {
                save: has_recording,
                ..Self::default()
            },
        }
    }

    /// Whether `command` is in the set.
    pub fn contains(&self, command: Command) -> bool {
        match command {
            Command::Start => self.start,
            Command::Stop => self.stop,
            Command::Save => self.save,
            Command::Play => self.play,
        }
    }
}
