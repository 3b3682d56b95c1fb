use crate::{AudioFormat, CHANNELS, SAMPLE_RATE};

use std::time::Duration;

/// WHAT: Default format is 44.1kHz stereo
/// WHY: Capture, playback and encoding all assume this fixed layout
#[test]
fn given_default_format_then_44100_stereo() {
    let format = AudioFormat::default();

    assert_eq!(format.sample_rate, SAMPLE_RATE);
    assert_eq!(format.sample_rate, 44_100);
    assert_eq!(format.channels, CHANNELS);
    assert_eq!(format.channels, 2);
}

/// WHAT: Frame and duration arithmetic on interleaved buffers
/// WHY: Cursor limits and lookahead windows are counted in frames
#[test]
fn given_interleaved_buffer_when_measuring_then_frames_and_duration_match() {
    // Given: One second of stereo audio
    let format = AudioFormat::default();
    let samples = 44_100 * 2;

    // Then: Frames, duration and frames_in agree
    assert_eq!(format.frames(samples), 44_100);
    assert_eq!(format.duration_of(samples), Duration::from_secs(1));
    assert_eq!(format.frames_in(Duration::from_secs(2)), 88_200);
    assert_eq!(format.frames(3), 1);
}
