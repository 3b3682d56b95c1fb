use crate::config::default_float_bits_per_sample;

use serde::{Deserialize, Serialize};

/// WAV encoder settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingConfig {
    /// Bit depth of the `hound` file: 16, 24 or 32 (float).
    #[serde(default = "default_float_bits_per_sample")]
    pub float_bits_per_sample: u16,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            float_bits_per_sample: default_float_bits_per_sample(),
        }
    }
}
