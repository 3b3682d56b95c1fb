use crate::{Command, CommandSet, SessionState};

/// WHAT: Only Start is legal while idle
/// WHY: Nothing exists to stop, save or play
#[test]
fn given_idle_state_then_only_start_enabled() {
    let set = CommandSet::for_state(SessionState::Idle, false);

    assert!(set.contains(Command::Start));
    assert!(!set.contains(Command::Stop));
    assert!(!set.contains(Command::Save));
    assert!(!set.contains(Command::Play));
}

/// WHAT: Only Stop is legal while recording
/// WHY: The buffer is still growing
#[test]
fn given_recording_state_then_only_stop_enabled() {
    let set = CommandSet::for_state(SessionState::Recording, false);

    assert_eq!(
        set,
        CommandSet {
            stop: true,
            ..CommandSet::default()
        }
    );
}

/// WHAT: Save and Play depend on a non-empty buffer
/// WHY: An empty take has nothing to save or play
#[test]
fn given_ready_state_then_save_and_play_follow_buffer() {
    let with = CommandSet::for_state(SessionState::Ready, true);
    let without = CommandSet::for_state(SessionState::Ready, false);

    assert!(with.start && with.save && with.play && !with.stop);
    assert!(without.start && !without.save && !without.play && !without.stop);
}

/// WHAT: Playback cannot be restarted or interrupted
/// WHY: There is no cancel command; play re-enables on completion
#[test]
fn given_playing_state_then_only_save_enabled() {
    let set = CommandSet::for_state(SessionState::Playing, true);

    for command in Command::ALL {
        assert_eq!(set.contains(command), command == Command::Save);
    }
}
