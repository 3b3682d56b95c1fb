//! Configuration management for voice-recorder.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths, validation, and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{EncodingConfig, PlaybackConfig, RecordingConfig, default_base_name},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use voice_recorder_core::{
    FloatWavEncoder, OutputTarget, RecorderSettings, RecordingSaver, SUPPORTED_BIT_DEPTHS,
};

/// Main configuration struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output location and naming.
    pub recording: RecordingConfig,
    /// Playback cursor settings.
    #[serde(default)]
    pub playback: PlaybackConfig,
    /// WAV encoder settings.
    #[serde(default)]
    pub encoding: EncodingConfig,
}

impl Config {
    /// Load configuration from disk, creating default if not found.
    ///
    /// An unreadable or invalid file does not stop the application: defaults
    /// are used for this run and the error is returned alongside so the user
    /// can be told. The broken file is left untouched.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<(Self, Option<AppError>)> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let fallback_dir = Self::default_output_dir()?;
            Ok(Self::load_or_fallback(&config_path, &fallback_dir))
        } else {
            info!("No config found, creating default");
            Ok((Self::create_default()?, None))
        }
    }

    /// Load `config_path`, or defaults saving into `fallback_dir` if it
    /// cannot be read, parsed or validated.
    pub fn load_or_fallback(config_path: &Path, fallback_dir: &Path) -> (Self, Option<AppError>) {
        match Self::load_from(config_path) {
            Ok(config) => (config, None),
            Err(e) => {
                warn!(config_path = ?config_path, error = ?e, "Invalid config, using defaults");
                (Self::with_output_dir(fallback_dir), Some(e))
            }
        }
    }

    /// Read, parse and validate the file at `config_path`.
    #[track_caller]
    #[instrument]
    pub fn load_from(config_path: &Path) -> AppResult<Self> {
        let config = Self::read_from(config_path)?;
        config.validate()?;

        info!(config_path = ?config_path, "Configuration loaded");

        Ok(config)
    }

    /// Read and parse the file at `config_path` without validating it.
    #[track_caller]
    pub fn read_from(config_path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Self::parse(&contents)
    }

    /// Parse a TOML document.
    #[track_caller]
    pub fn parse(contents: &str) -> AppResult<Self> {
        toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Defaults that save into `output_dir`.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            recording: RecordingConfig {
                output_dir: output_dir.into(),
                filename_base: String::new(),
                default_base_name: default_base_name(),
            },
            playback: PlaybackConfig::default(),
            encoding: EncodingConfig::default(),
        }
    }

    /// Reject values the recorder cannot run with.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn validate(&self) -> AppResult<()> {
        let reason = if !SUPPORTED_BIT_DEPTHS.contains(&self.encoding.float_bits_per_sample) {
            format!(
                "encoding.float_bits_per_sample must be one of {:?}, got {}",
                SUPPORTED_BIT_DEPTHS, self.encoding.float_bits_per_sample
            )
        } else if self.playback.cursor_interval_ms == 0 {
            "playback.cursor_interval_ms must be greater than 0".to_string()
        } else if !(self.playback.lookahead_secs.is_finite() && self.playback.lookahead_secs > 0.0)
        {
            format!(
                "playback.lookahead_secs must be a positive number, got {}",
                self.playback.lookahead_secs
            )
        } else if self.recording.default_base_name.trim().is_empty() {
            "recording.default_base_name must not be blank".to_string()
        } else {
            return Ok(());
        };

        Err(AppError::ConfigError {
            reason,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Ticker and plot settings for the recorder.
    pub fn recorder_settings(&self) -> RecorderSettings {
        RecorderSettings {
            cursor_interval: Duration::from_millis(self.playback.cursor_interval_ms),
            lookahead: Duration::from_secs_f64(self.playback.lookahead_secs),
            cursor_source: self.playback.cursor_source.into(),
            ..RecorderSettings::default()
        }
    }

    /// Saver writing into the configured directory.
    #[track_caller]
    pub fn saver(&self) -> AppResult<RecordingSaver> {
        let encoder = FloatWavEncoder::new(self.encoding.float_bits_per_sample)?;
        let target = OutputTarget {
            directory: self.recording.output_dir.clone(),
            default_base_name: self.recording.default_base_name.clone(),
        };
        Ok(RecordingSaver::new(target, encoder))
    }

    /// Save configuration to disk using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    #[track_caller]
    pub(crate) fn save_to(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(())
    }

    #[track_caller]
    fn project_dirs() -> AppResult<ProjectDirs> {
        ProjectDirs::from("com", "voice-recorder", "Voice-Recorder").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get project directories".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Location of `config.toml`, creating its directory if needed.
    #[track_caller]
    pub(crate) fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = Self::project_dirs()?;
        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }

    #[track_caller]
    fn default_output_dir() -> AppResult<PathBuf> {
        Ok(Self::project_dirs()?.data_dir().join("recordings"))
    }

    #[track_caller]
    fn create_default() -> AppResult<Self> {
        let output_dir = Self::default_output_dir()?;

        let config = Self::with_output_dir(&output_dir);
        config.save()?;

        warn!(
            output_dir = ?output_dir,
            "Default config created. Recordings will be saved to the data directory."
        );

        Ok(config)
    }
}
