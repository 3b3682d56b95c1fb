use crate::audio::PlaybackPosition;

use std::time::Duration;

use tokio::time::Instant;

/// Cursor frame index at `elapsed` into playback: `round(t * sample_rate)`.
pub fn cursor_index(elapsed: Duration, sample_rate: u32) -> usize {
    (elapsed.as_secs_f64() * f64::from(sample_rate)).round() as usize
}

/// Where the playback cursor should be right now.
pub trait PlaybackClock: Send + 'static {
    /// Current cursor frame index.
    fn cursor(&self, sample_rate: u32) -> usize;
}

/// Cursor extrapolated from monotonic time since playback began.
///
/// Not fed by the device, so output buffering or under-runs drift the
/// cursor away from what is audible.
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    started_at: Instant,
}

impl WallClock {
    /// Clock whose zero is `started_at`.
    pub fn new(started_at: Instant) -> Self {
        Self { started_at }
    }

    /// Clock starting now.
    pub fn start_now() -> Self {
        Self::new(Instant::now())
    }
}

impl PlaybackClock for WallClock {
    fn cursor(&self, sample_rate: u32) -> usize {
        cursor_index(self.started_at.elapsed(), sample_rate)
    }
}

/// Cursor taken from the frames the output device has actually consumed.
#[derive(Debug, Clone)]
pub struct DeviceClock {
    position: PlaybackPosition,
}

impl DeviceClock {
    /// Clock reading the device's frames-played counter.
    pub fn new(position: PlaybackPosition) -> Self {
        Self { position }
    }
}

impl PlaybackClock for DeviceClock {
    fn cursor(&self, _sample_rate: u32) -> usize {
        usize::try_from(self.position.frames()).unwrap_or(usize::MAX)
    }
}

/// Which clock drives the playback cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorSource {
    /// [`WallClock`].
    #[default]
    WallClock,
    /// [`DeviceClock`], falling back to the wall clock when the playback
    /// device keeps no position.
    Device,
}
