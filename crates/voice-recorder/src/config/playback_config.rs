use crate::config::{default_cursor_interval_ms, default_lookahead_secs};

use serde::{Deserialize, Serialize};
use voice_recorder_core::CursorSource;

/// Playback cursor animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Cursor redraw cadence in milliseconds.
    #[serde(default = "default_cursor_interval_ms")]
    pub cursor_interval_ms: u64,

    /// Seconds of audio the cursor travels before the plot scrolls.
    #[serde(default = "default_lookahead_secs")]
    pub lookahead_secs: f64,

    /// What drives the cursor.
    #[serde(default)]
    pub cursor_source: CursorSourceConfig,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            cursor_interval_ms: default_cursor_interval_ms(),
            lookahead_secs: default_lookahead_secs(),
            cursor_source: CursorSourceConfig::default(),
        }
    }
}

/// Serialized form of [`CursorSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorSourceConfig {
    /// Extrapolate from elapsed wall-clock time.
    #[default]
    WallClock,
    /// Follow frames consumed by the output device.
    Device,
}

impl From<CursorSourceConfig> for CursorSource {
    fn from(value: CursorSourceConfig) -> Self {
        match value {
            CursorSourceConfig::WallClock => CursorSource::WallClock,
            CursorSourceConfig::Device => CursorSource::Device,
        }
    }
}
