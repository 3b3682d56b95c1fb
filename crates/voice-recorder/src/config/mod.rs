mod encoding_config;
mod playback_config;
#[allow(clippy::module_inception)]
mod config;
mod recording_config;

pub(crate) use {
    config::Config,
    encoding_config::EncodingConfig,
    playback_config::{CursorSourceConfig, PlaybackConfig},
    recording_config::RecordingConfig,
};

pub(crate) const DEFAULT_CURSOR_INTERVAL_MS: u64 = 20;
pub(crate) const DEFAULT_LOOKAHEAD_SECS: f64 = 2.0;
pub(crate) const DEFAULT_FLOAT_BITS_PER_SAMPLE: u16 = 16;

pub(crate) fn default_cursor_interval_ms() -> u64 {
    DEFAULT_CURSOR_INTERVAL_MS
}

pub(crate) fn default_lookahead_secs() -> f64 {
    DEFAULT_LOOKAHEAD_SECS
}

pub(crate) fn default_float_bits_per_sample() -> u16 {
    DEFAULT_FLOAT_BITS_PER_SAMPLE
}

pub(crate) fn default_base_name() -> String {
    voice_recorder_core::DEFAULT_BASE_NAME.to_string()
}
