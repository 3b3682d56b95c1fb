use crate::{AudioCapturer, AudioFormat, AudioPlayer, CaptureDevice};

/// WHAT: Real microphone capture round trip
/// WHY: Verifies the cpal stream opens at 44.1kHz stereo and closes cleanly
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
#[allow(clippy::unwrap_used)]
fn given_default_microphone_when_recording_briefly_then_interleaved_stereo_returned() {
    // Given: The default input device
    let mut capturer = AudioCapturer::new().unwrap();

    // When: Recording for a short moment
    capturer.start(AudioFormat::default()).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(300));
    let samples = capturer.stop().unwrap();

    // Then: Samples are whole stereo frames and the buffer is closed
    assert_eq!(samples.len() % 2, 0);
    assert!(!capturer.chunks().is_accepting());
}

/// WHAT: Opening the capture stream twice is rejected
/// WHY: Start and stop must stay strictly paired
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
#[allow(clippy::unwrap_used)]
fn given_open_stream_when_starting_again_then_device_error() {
    let mut capturer = AudioCapturer::new().unwrap();
    capturer.start(AudioFormat::default()).unwrap();

    let second = capturer.start(AudioFormat::default());

    assert!(second.is_err());
    capturer.stop().unwrap();
}

/// WHAT: Output device is available
/// WHY: Playback needs a default output device
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn given_system_when_creating_player_then_succeeds() {
    assert!(AudioPlayer::new().is_ok());
}
