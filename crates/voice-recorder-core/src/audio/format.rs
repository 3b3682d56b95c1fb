use std::time::Duration;

/// Capture and playback sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

/// Capture and playback channel count (stereo).
pub const CHANNELS: u16 = 2;

/// Interleaved `f32` sample layout shared by capture, playback and encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    /// Frames per second.
    pub sample_rate: u32,
    /// Samples per frame.
    pub channels: u16,
}

impl AudioFormat {
    /// Number of whole frames in an interleaved buffer of `samples` length.
    pub fn frames(&self, samples: usize) -> usize {
        samples / usize::from(self.channels.max(1))
    }

    /// Number of frames covering `duration`.
    pub fn frames_in(&self, duration: Duration) -> usize {
        (duration.as_secs_f64() * f64::from(self.sample_rate)).round() as usize
    }

    /// Playback duration of an interleaved buffer of `samples` length.
    pub fn duration_of(&self, samples: usize) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frames(samples) as f64 / f64::from(self.sample_rate))
    }
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            channels: CHANNELS,
        }
    }
}
