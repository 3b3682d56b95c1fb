use crate::{
    CoreResult, RecorderError,
    audio::{AudioFormat, CaptureDevice, ChunkBuffer},
};

use std::panic::Location;

use cpal::{
    BufferSize, Device, Stream, StreamConfig,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument};

/// Microphone capture through the default cpal input device.
pub struct AudioCapturer {
    device: Device,
    stream: Option<Stream>,
    chunks: ChunkBuffer,
}

impl AudioCapturer {
    /// Bind to the default input device.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::NoMicrophoneFound`] if the host has no
    /// input device.
    #[track_caller]
    #[instrument]
    pub fn new() -> CoreResult<Self> {
        let host = cpal::default_host();

        let device = host
            .default_input_device()
            .ok_or(RecorderError::NoMicrophoneFound {
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(device_id = ?device.id(), "AudioCapturer initialized");

        Ok(Self {
            device,
            stream: None,
            chunks: ChunkBuffer::new(),
        })
    }

    /// Handle to the chunk list the callback appends to.
    pub fn chunks(&self) -> &ChunkBuffer {
        &self.chunks
    }
}

impl CaptureDevice for AudioCapturer {
    #[track_caller]
    #[instrument(skip(self))]
    fn start(&mut self, format: AudioFormat) -> CoreResult<()> {
        if self.stream.is_some() {
            return Err(RecorderError::DeviceError {
                reason: "Capture stream already open".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let config = StreamConfig {
            channels: format.channels,
            sample_rate: format.sample_rate,
            buffer_size: BufferSize::Default,
        };

        self.chunks.open();
        let chunks = self.chunks.clone();

        let stream = self
            .device
            .build_input_stream(
                &config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    chunks.push(data);
                },
                |err| {
                    error!("Capture stream error: {}", err);
                },
                None,
            )
            .map_err(|e| {
                self.chunks.close();
                RecorderError::DeviceError {
                    reason: format!("Failed to build input stream: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        stream.play().map_err(|e| {
            self.chunks.close();
            RecorderError::DeviceError {
                reason: format!("Failed to start input stream: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        self.stream = Some(stream);
        info!(
            sample_rate = format.sample_rate,
            channels = format.channels,
            "Audio capture started"
        );

        Ok(())
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn stop(&mut self) -> CoreResult<Vec<f32>> {
        // Close the buffer before dropping the stream so a callback that
        // fires during teardown cannot append.
        self.chunks.close();

        if let Some(stream) = self.stream.take() {
            if let Err(e) = stream.pause() {
                debug!(error = %e, "Failed to pause input stream before close");
            }
            drop(stream);
            info!("Audio capture stopped");
        }

        let samples = self.chunks.take_concatenated();
        debug!(sample_count = samples.len(), "Captured audio samples");

        Ok(samples)
    }
}
