use crate::config::default_base_name;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where recordings are saved and under what name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Directory both WAV files are written into.
    pub output_dir: PathBuf,

    /// Base filename for the next save. Blank uses `default_base_name`.
    #[serde(default)]
    pub filename_base: String,

    /// Fallback base filename.
    #[serde(default = "default_base_name")]
    pub default_base_name: String,
}
