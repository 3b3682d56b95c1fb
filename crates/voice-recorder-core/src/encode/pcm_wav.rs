use crate::{CoreResult, RecorderError, audio::AudioFormat};

use std::{fs::File, io::BufWriter, panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Writes 16-bit integer PCM through the `wav` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PcmWavEncoder;

impl PcmWavEncoder {
    /// Suffix used in output file names.
    pub const TAG: &'static str = "wav";

    /// Write interleaved PCM16 samples to `path`, replacing any existing file.
    #[track_caller]
    #[instrument(skip(self, samples), fields(sample_count = samples.len()))]
    pub fn write(&self, path: &Path, samples: &[i16], format: AudioFormat) -> CoreResult<()> {
        let header = wav::Header::new(
            wav::WAV_FORMAT_PCM,
            format.channels,
            format.sample_rate,
            16,
        );

        let file = File::create(path).map_err(|e| RecorderError::EncodeFailed {
            path: path.to_path_buf(),
            reason: format!("Failed to create file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let mut writer = BufWriter::new(file);

        wav::write(header, &wav::BitDepth::Sixteen(samples.to_vec()), &mut writer).map_err(
            |e| RecorderError::EncodeFailed {
                path: path.to_path_buf(),
                reason: format!("Failed to encode PCM16: {}", e),
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        writer
            .into_inner()
            .map_err(|e| RecorderError::EncodeFailed {
                path: path.to_path_buf(),
                reason: format!("Failed to flush file: {}", e.error()),
                location: ErrorLocation::from(Location::caller()),
            })?
            .sync_all()
            .map_err(|e| RecorderError::EncodeFailed {
                path: path.to_path_buf(),
                reason: format!("Failed to sync file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(path = ?path, "PCM16 WAV written");

        Ok(())
    }
}
