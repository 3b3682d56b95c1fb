use crate::{DeviceClock, PlaybackPosition, RecorderEvent, WallClock, spawn_cursor_ticker};

use std::time::Duration;

use tokio::{sync::mpsc, time::Instant};
use uuid::Uuid;

/// WHAT: Cursor ticker walks to the end then reports completion
/// WHY: Playback UI is restored once the cursor meets the frame count
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_short_buffer_when_ticking_then_cursor_events_then_finished() {
    // Given: 0.1s of audio at 44.1kHz and a 20ms cadence
    let (tx, mut rx) = mpsc::channel(32);
    let session_id = Uuid::new_v4();
    let total_frames = 4_410;
    let _ticker = spawn_cursor_ticker(
        session_id,
        WallClock::new(Instant::now()),
        44_100,
        total_frames,
        Duration::from_millis(20),
        tx,
    );

    // When: Draining all events
    let mut frames = Vec::new();
    let mut finished = false;
    while let Some(event) = rx.recv().await {
        match event {
            RecorderEvent::CursorMoved { frame, .. } => frames.push(frame),
            RecorderEvent::PlaybackFinished { session_id: id } => {
                assert_eq!(id, session_id);
                finished = true;
            }
            other => unreachable!("unexpected event {:?}", other),
        }
    }

    // Then: Frames follow round(t * rate) at 20ms steps, all below the
    // total, and completion is reported exactly once at the end
    assert!(finished);
    assert_eq!(frames, vec![0, 882, 1_764, 2_646, 3_528]);
    assert!(frames.iter().all(|&f| f < total_frames));
}

/// WHAT: Device clock drives the cursor from consumed frames
/// WHY: Optional exact audio-visual sync
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_device_clock_when_device_reaches_end_then_finished() {
    // Given: A device position the test controls
    let (tx, mut rx) = mpsc::channel(32);
    let position = PlaybackPosition::new();
    let _ticker = spawn_cursor_ticker(
        Uuid::new_v4(),
        DeviceClock::new(position.clone()),
        44_100,
        1_000,
        Duration::from_millis(20),
        tx,
    );

    // When: The device has consumed 400 frames, then all of them
    position.advance(400);
    let first = rx.recv().await.unwrap();
    position.advance(600);
    let mut last = first;
    while let Some(event) = rx.recv().await {
        last = event;
    }

    // Then: Cursor tracked the device and playback finished
    assert!(matches!(first, RecorderEvent::CursorMoved { frame: 400, .. }));
    assert!(matches!(last, RecorderEvent::PlaybackFinished { .. }));
}
