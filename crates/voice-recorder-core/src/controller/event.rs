use std::time::Duration;

use uuid::Uuid;

/// Messages from background tickers back to the task that owns the
/// recorder. Each carries the id of the session that spawned the ticker so
/// events from a previous take can be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderEvent {
    /// Time since the recording started.
    Elapsed {
        /// Session that spawned the ticker.
        session_id: Uuid,
        /// `now - started_at`.
        elapsed: Duration,
    },
    /// New playback cursor position, in frames.
    CursorMoved {
        /// Session that spawned the ticker.
        session_id: Uuid,
        /// Cursor frame index.
        frame: usize,
    },
    /// The cursor reached the end of the buffer.
    PlaybackFinished {
        /// Session that spawned the ticker.
        session_id: Uuid,
    },
}
