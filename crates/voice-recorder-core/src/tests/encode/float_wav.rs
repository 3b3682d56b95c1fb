use crate::{AudioFormat, FloatWavEncoder, RecorderError};

use crate::tests::fakes::scratch_dir;

/// WHAT: Only 16, 24 and 32 bit output is accepted
/// WHY: Other depths have no clean mapping from normalized floats
#[test]
fn given_unsupported_bit_depth_when_creating_encoder_then_rejected() {
    assert!(matches!(
        FloatWavEncoder::new(8),
        Err(RecorderError::UnsupportedBitDepth { bits: 8, .. })
    ));
    assert!(FloatWavEncoder::new(16).is_ok());
    assert!(FloatWavEncoder::new(24).is_ok());
    assert!(FloatWavEncoder::new(32).is_ok());
}

/// WHAT: 32-bit output stores IEEE floats unchanged
/// WHY: Float WAVs must not lose precision
#[test]
#[allow(clippy::unwrap_used)]
fn given_32_bit_encoder_when_writing_then_floats_read_back_exactly() {
    // Given: A 32-bit encoder and a short stereo buffer
    let dir = scratch_dir("float32");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("take_hound.wav");
    let samples = [0.1f32, -0.2, 0.3, -0.4];

    // When: Writing and reading back
    FloatWavEncoder::new(32)
        .unwrap()
        .write(&path, &samples, AudioFormat::default())
        .unwrap();
    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    let read: Vec<f32> = reader.samples::<f32>().map(Result::unwrap).collect();

    // Then: Header and samples match
    assert_eq!(spec.sample_format, hound::SampleFormat::Float);
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 44_100);
    assert_eq!(read, samples);

    let _ = std::fs::remove_dir_all(&dir);
}

/// WHAT: 24-bit output scales by the 24-bit full scale
/// WHY: Integer depths use the same clamp-and-truncate rule as PCM16
#[test]
#[allow(clippy::unwrap_used)]
fn given_24_bit_encoder_when_writing_then_full_scale_is_8388607() {
    let dir = scratch_dir("int24");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("take_hound.wav");

    FloatWavEncoder::new(24)
        .unwrap()
        .write(&path, &[1.0, -1.0, 2.0, 0.0], AudioFormat::default())
        .unwrap();
    let mut reader = hound::WavReader::open(&path).unwrap();
    let read: Vec<i32> = reader.samples::<i32>().map(Result::unwrap).collect();

    assert_eq!(reader.spec().bits_per_sample, 24);
    assert_eq!(read, vec![8_388_607, -8_388_607, 8_388_607, 0]);

    let _ = std::fs::remove_dir_all(&dir);
}
