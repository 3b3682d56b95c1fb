use crate::{DeviceClock, PlaybackClock, PlaybackPosition, WallClock, cursor_index};

use std::time::Duration;

use tokio::time::Instant;

/// WHAT: Cursor index is round(t * sample_rate)
/// WHY: The cursor is derived purely from elapsed time
#[test]
fn given_elapsed_times_when_computing_cursor_then_rounded_product() {
    assert_eq!(cursor_index(Duration::ZERO, 44_100), 0);
    assert_eq!(cursor_index(Duration::from_secs(1), 44_100), 44_100);
    assert_eq!(cursor_index(Duration::from_millis(20), 44_100), 882);
    // 10µs * 44100 = 0.441 -> 0, 15µs -> 0.6615 -> 1
    assert_eq!(cursor_index(Duration::from_micros(10), 44_100), 0);
    assert_eq!(cursor_index(Duration::from_micros(15), 44_100), 1);
}

/// WHAT: Wall clock follows (paused) tokio time
/// WHY: The animation is driven by time since playback began
#[tokio::test(start_paused = true)]
async fn given_wall_clock_when_time_advances_then_cursor_advances() {
    // Given: A clock started now
    let clock = WallClock::new(Instant::now());
    assert_eq!(clock.cursor(44_100), 0);

    // When: 500ms pass
    tokio::time::advance(Duration::from_millis(500)).await;

    // Then: Cursor is half a second of frames in
    assert_eq!(clock.cursor(44_100), 22_050);
}

/// WHAT: Device clock reports frames consumed by the device
/// WHY: Device position avoids wall-clock drift
#[test]
fn given_device_clock_when_frames_consumed_then_cursor_matches() {
    let position = PlaybackPosition::new();
    let clock = DeviceClock::new(position.clone());

    position.advance(512);
    position.advance(512);

    assert_eq!(clock.cursor(44_100), 1024);

    position.reset();
    assert_eq!(clock.cursor(44_100), 0);
}
