use crate::{
    CoreResult, RecorderError,
    audio::AudioFormat,
    encode::{FloatWavEncoder, OutputTarget, PcmWavEncoder, pcm::to_pcm16_buffer},
};

use std::{panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use tracing::{error, info, instrument};

/// Writes one recording through both WAV encoders.
#[derive(Debug, Clone)]
pub struct RecordingSaver {
    target: OutputTarget,
    pcm: PcmWavEncoder,
    float: FloatWavEncoder,
}

impl RecordingSaver {
    /// Save into `target`, with `float` as the second encoder.
    pub fn new(target: OutputTarget, float: FloatWavEncoder) -> Self {
        Self {
            target,
            pcm: PcmWavEncoder,
            float,
        }
    }

    /// Write `<base>_wav.wav` and `<base>_hound.wav`.
    ///
    /// Both encoders always run. If either fails the other's file is still
    /// written and left on disk, and every failure is returned together in
    /// [`RecorderError::SaveFailed`].
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::NoRecording`] for an empty buffer, or
    /// [`RecorderError::SaveFailed`] if any encoder fails.
    #[track_caller]
    #[instrument(skip(self, samples), fields(sample_count = samples.len()))]
    pub fn save(
        &self,
        samples: &[f32],
        format: AudioFormat,
        base_name: &str,
    ) -> CoreResult<Vec<PathBuf>> {
        if samples.is_empty() {
            return Err(RecorderError::NoRecording {
                action: "save",
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !self.target.directory.as_os_str().is_empty() && !self.target.directory.exists() {
            std::fs::create_dir_all(&self.target.directory).map_err(|e| {
                RecorderError::SaveFailed {
                    failures: vec![RecorderError::EncodeFailed {
                        path: self.target.directory.clone(),
                        reason: format!("Failed to create output directory: {}", e),
                        location: ErrorLocation::from(Location::caller()),
                    }],
                }
            })?;
        }

        let pcm_path = self.target.path_for(base_name, PcmWavEncoder::TAG);
        let float_path = self.target.path_for(base_name, FloatWavEncoder::TAG);

        let pcm = to_pcm16_buffer(samples);
        let results = [
            (pcm_path.clone(), self.pcm.write(&pcm_path, &pcm, format)),
            (float_path.clone(), self.float.write(&float_path, samples, format)),
        ];

        let mut written = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for (path, result) in results {
            match result {
                Ok(()) => written.push(path),
                Err(e) => {
                    error!(path = ?path, error = ?e, "Encoder failed");
                    failures.push(e);
                }
            }
        }

        if !failures.is_empty() {
            return Err(RecorderError::SaveFailed { failures });
        }

        info!(files = ?written, "Recording saved");

        Ok(written)
    }
}
