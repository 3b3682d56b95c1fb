use crate::{
    CoreResult, RecorderError,
    audio::{AudioFormat, PlaybackDevice, PlaybackPosition},
};

use std::{panic::Location, sync::Arc};

use cpal::{
    BufferSize, Device, Stream, StreamConfig,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument};

/// Buffer playback through the default cpal output device.
///
/// The output stream emits silence after the buffer runs out until
/// [`PlaybackDevice::stop`] releases it, the next [`PlaybackDevice::play`]
/// replaces it, or the player is dropped.
pub struct AudioPlayer {
    device: Device,
    stream: Option<Stream>,
    position: PlaybackPosition,
}

impl AudioPlayer {
    /// Bind to the default output device.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::NoOutputDevice`] if the host has no output
    /// device.
    #[track_caller]
    #[instrument]
    pub fn new() -> CoreResult<Self> {
        let host = cpal::default_host();

        let device = host
            .default_output_device()
            .ok_or(RecorderError::NoOutputDevice {
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(device_id = ?device.id(), "AudioPlayer initialized");

        Ok(Self {
            device,
            stream: None,
            position: PlaybackPosition::new(),
        })
    }
}

impl PlaybackDevice for AudioPlayer {
    #[track_caller]
    #[instrument(skip(self, samples), fields(sample_count = samples.len()))]
    fn play(&mut self, samples: Arc<[f32]>, format: AudioFormat) -> CoreResult<()> {
        // Replacing the stream stops whatever was still playing.
        self.stream = None;
        self.position.reset();

        let config = StreamConfig {
            channels: format.channels,
            sample_rate: format.sample_rate,
            buffer_size: BufferSize::Default,
        };

        let channels = usize::from(format.channels.max(1));
        let position = self.position.clone();
        let mut cursor = 0usize;

        let stream = self
            .device
            .build_output_stream(
                &config,
                move |out: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let remaining = samples.len().saturating_sub(cursor);
                    let n = remaining.min(out.len());

                    out[..n].copy_from_slice(&samples[cursor..cursor + n]);
                    out[n..].fill(0.0);

                    cursor += n;
                    position.advance((n / channels) as u64);
                },
                |err| {
                    error!("Playback stream error: {}", err);
                },
                None,
            )
            .map_err(|e| RecorderError::DeviceError {
                reason: format!("Failed to build output stream: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        stream.play().map_err(|e| RecorderError::DeviceError {
            reason: format!("Failed to start output stream: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.stream = Some(stream);
        info!("Playback started");

        Ok(())
    }

    #[instrument(skip(self))]
    fn stop(&mut self) {
        if let Some(stream) = self.stream.take() {
            if let Err(e) = stream.pause() {
                debug!(error = %e, "Failed to pause output stream before release");
            }
            info!("Playback stream released");
        }
    }

    fn position(&self) -> Option<PlaybackPosition> {
        Some(self.position.clone())
    }
}
