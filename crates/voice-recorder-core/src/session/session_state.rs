use std::fmt;

/// Lifecycle state of the live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nothing recorded yet.
    #[default]
    Idle,
    /// Capture stream open, chunks accumulating.
    Recording,
    /// Recording finished; buffer immutable.
    Ready,
    /// Buffer is being played back.
    Playing,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Idle => "idle",
            SessionState::Recording => "recording",
            SessionState::Ready => "ready",
            SessionState::Playing => "playing",
        };
        f.write_str(s)
    }
}
