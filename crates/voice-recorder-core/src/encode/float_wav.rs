use crate::{CoreResult, RecorderError, audio::AudioFormat, encode::pcm::to_pcm};

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use hound::{SampleFormat, WavSpec, WavWriter};
use tracing::{debug, instrument};

/// Bit depths [`FloatWavEncoder`] can write.
pub const SUPPORTED_BIT_DEPTHS: [u16; 3] = [16, 24, 32];

/// Writes normalized float samples through `hound` at a chosen bit depth.
///
/// 16 and 24 bits produce integer PCM (clamped, truncated); 32 bits writes
/// IEEE float samples unchanged.
#[derive(Debug, Clone, Copy)]
pub struct FloatWavEncoder {
    bits_per_sample: u16,
}

impl FloatWavEncoder {
    /// Suffix used in output file names.
    pub const TAG: &'static str = "hound";

    /// # Errors
    ///
    /// Returns [`RecorderError::UnsupportedBitDepth`] for anything outside
    /// [`SUPPORTED_BIT_DEPTHS`].
    #[track_caller]
    pub fn new(bits_per_sample: u16) -> CoreResult<Self> {
        if !SUPPORTED_BIT_DEPTHS.contains(&bits_per_sample) {
            return Err(RecorderError::UnsupportedBitDepth {
                bits: bits_per_sample,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self { bits_per_sample })
    }

    /// Bit depth of written files.
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Write interleaved float samples to `path`, replacing any existing file.
    #[track_caller]
    #[instrument(
        skip(self, samples),
        fields(sample_count = samples.len(), bits = self.bits_per_sample)
    )]
    pub fn write(&self, path: &Path, samples: &[f32], format: AudioFormat) -> CoreResult<()> {
        let encode_err = |e: hound::Error| RecorderError::EncodeFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        };

        let spec = WavSpec {
            channels: format.channels,
            sample_rate: format.sample_rate,
            bits_per_sample: self.bits_per_sample,
            sample_format: if self.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        };

        let mut writer = WavWriter::create(path, spec).map_err(encode_err)?;

        if self.bits_per_sample == 32 {
            for &sample in samples {
                writer.write_sample(sample).map_err(encode_err)?;
            }
        } else {
            for &sample in samples {
                writer
                    .write_sample(to_pcm(sample, self.bits_per_sample))
                    .map_err(encode_err)?;
            }
        }

        writer.finalize().map_err(encode_err)?;

        debug!(path = ?path, "WAV written");

        Ok(())
    }
}
