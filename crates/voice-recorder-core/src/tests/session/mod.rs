use crate::{AudioFormat, Session, SessionState};

use tokio::time::Instant;

/// WHAT: Idle session has no recording and a nil id
/// WHY: Save and play must be unavailable before the first take
#[test]
fn given_new_idle_session_then_no_recording() {
    let session = Session::idle(AudioFormat::default());

    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.id().is_nil());
    assert!(!session.has_recording());
    assert_eq!(session.frame_count(), 0);
}

/// WHAT: Finishing seals the buffer and moves to Ready
/// WHY: The buffer is immutable once recording stops
#[tokio::test]
async fn given_recording_session_when_finished_then_ready_with_frames() {
    // Given: A session in Recording
    let mut session = Session::recording(AudioFormat::default(), Instant::now());
    assert_eq!(session.state(), SessionState::Recording);
    assert!(!session.id().is_nil());

    // When: Finishing with four stereo frames
    let shared = session.finish(vec![0.1; 8]);

    // Then: Ready, same allocation shared, four frames
    assert_eq!(session.state(), SessionState::Ready);
    assert_eq!(session.frame_count(), 4);
    assert!(session.has_recording());
    assert!(session.samples().is_some_and(|s| std::sync::Arc::ptr_eq(s, &shared)));
}

/// WHAT: An empty take is Ready but not playable
/// WHY: Save and play require a non-empty buffer
#[tokio::test]
async fn given_empty_take_when_finished_then_not_playable() {
    let mut session = Session::recording(AudioFormat::default(), Instant::now());

    session.finish(Vec::new());

    assert_eq!(session.state(), SessionState::Ready);
    assert!(session.samples().is_some());
    assert!(session.playable_samples().is_none());
}

/// WHAT: Every new recording session gets a distinct id
/// WHY: Ticker events are matched to their session by id
#[tokio::test]
async fn given_two_recordings_then_ids_differ() {
    let a = Session::recording(AudioFormat::default(), Instant::now());
    let b = Session::recording(AudioFormat::default(), Instant::now());

    assert_ne!(a.id(), b.id());
}
