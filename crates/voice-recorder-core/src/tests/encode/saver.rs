use crate::{
    AudioFormat, FloatWavEncoder, OutputTarget, RecorderError, RecordingSaver,
    tests::fakes::{scratch_dir, stereo_ramp},
};

use std::fs::File;

#[allow(clippy::unwrap_used)]
fn saver_in(dir: &std::path::Path) -> RecordingSaver {
    RecordingSaver::new(OutputTarget::new(dir), FloatWavEncoder::new(16).unwrap())
}

/// WHAT: One save writes both encodings under the default base
/// WHY: Both encoders always run and a blank name uses the default
#[test]
#[allow(clippy::unwrap_used)]
fn given_blank_name_when_saving_then_two_default_named_files_written() {
    // Given: A saver pointed at a fresh directory
    let dir = scratch_dir("save-default");
    let saver = saver_in(&dir);
    let samples = stereo_ramp(441);

    // When: Saving with a blank name
    let files = saver.save(&samples, AudioFormat::default(), "").unwrap();

    // Then: Both default-named files exist
    assert_eq!(
        files,
        vec![
            dir.join("manual_recording_wav.wav"),
            dir.join("manual_recording_hound.wav"),
        ]
    );
    assert!(files.iter().all(|f| f.exists()));

    let _ = std::fs::remove_dir_all(&dir);
}

/// WHAT: Both files decode to the same PCM16 samples
/// WHY: The two encoders must agree on the conversion
#[test]
#[allow(clippy::unwrap_used)]
fn given_named_save_when_reading_back_then_encoders_agree() {
    // Given: A saved recording named "foo"
    let dir = scratch_dir("save-foo");
    let saver = saver_in(&dir);
    let samples = vec![1.0, -1.0, 0.5, -0.5, 0.0, 0.25];
    saver.save(&samples, AudioFormat::default(), "foo").unwrap();

    // When: Reading back each file with its own library
    let mut pcm_file = File::open(dir.join("foo_wav.wav")).unwrap();
    let (header, data) = wav::read(&mut pcm_file).unwrap();
    let from_wav = data.try_into_sixteen().unwrap();

    let mut reader = hound::WavReader::open(dir.join("foo_hound.wav")).unwrap();
    let from_hound: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();

    // Then: Headers describe 44.1kHz stereo PCM16 and samples match
    assert_eq!(header.channel_count, 2);
    assert_eq!(header.sampling_rate, 44_100);
    assert_eq!(header.bits_per_sample, 16);
    assert_eq!(from_wav, vec![32_767, -32_767, 16_383, -16_383, 0, 8_191]);
    assert_eq!(from_hound, from_wav);

    let _ = std::fs::remove_dir_all(&dir);
}

/// WHAT: Empty buffer is a NoRecording warning, no files written
/// WHY: Nothing to save is distinct from a failed save
#[test]
fn given_empty_buffer_when_saving_then_no_recording_warning() {
    let dir = scratch_dir("save-empty");
    let saver = saver_in(&dir);

    let result = saver.save(&[], AudioFormat::default(), "foo");

    assert!(matches!(result, Err(RecorderError::NoRecording { .. })));
    assert!(!dir.exists());
}

/// WHAT: Encoder failures are collected, not fatal
/// WHY: A failed save must be reported and retryable
#[test]
#[allow(clippy::unwrap_used)]
fn given_unwritable_target_when_saving_then_save_failed_lists_both_encoders() {
    // Given: Each output path is occupied by a directory
    let dir = scratch_dir("save-blocked");
    std::fs::create_dir_all(dir.join("foo_wav.wav")).unwrap();
    std::fs::create_dir_all(dir.join("foo_hound.wav")).unwrap();
    let saver = saver_in(&dir);

    // When: Saving
    let result = saver.save(&stereo_ramp(10), AudioFormat::default(), "foo");

    // Then: Both failures are reported together
    match result {
        Err(RecorderError::SaveFailed { failures }) => {
            assert_eq!(failures.len(), 2);
            assert!(
                failures
                    .iter()
                    .all(|f| matches!(f, RecorderError::EncodeFailed { .. }))
            );
        }
        other => unreachable!("expected SaveFailed, got {:?}", other),
    }

    let _ = std::fs::remove_dir_all(&dir);
}

/// WHAT: One encoder failing leaves the other's file on disk
/// WHY: No partial-file cleanup is performed
#[test]
#[allow(clippy::unwrap_used)]
fn given_one_blocked_path_when_saving_then_other_file_still_written() {
    let dir = scratch_dir("save-partial");
    std::fs::create_dir_all(dir.join("foo_hound.wav")).unwrap();
    let saver = saver_in(&dir);

    let result = saver.save(&stereo_ramp(10), AudioFormat::default(), "foo");

    assert!(matches!(
        result,
        Err(RecorderError::SaveFailed { ref failures }) if failures.len() == 1
    ));
    assert!(dir.join("foo_wav.wav").is_file());

    let _ = std::fs::remove_dir_all(&dir);
}
