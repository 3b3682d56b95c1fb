/// Largest positive 16-bit PCM value, the full-scale multiplier.
pub const PCM16_FULL_SCALE: f32 = i16::MAX as f32;

/// Convert one normalized float sample to 16-bit signed PCM.
///
/// The input is clamped to `[-1.0, 1.0]`, scaled by [`PCM16_FULL_SCALE`] and
/// truncated toward zero. The mapping is symmetric: `1.0` gives `32767`,
/// `-1.0` gives `-32767`, and `i16::MIN` is never produced. NaN maps to `0`.
pub fn to_pcm16(sample: f32) -> i16 {
    if sample.is_nan() {
        return 0;
    }
    (sample.clamp(-1.0, 1.0) * PCM16_FULL_SCALE) as i16
}

/// Convert a whole interleaved buffer. See [`to_pcm16`].
pub fn to_pcm16_buffer(samples: &[f32]) -> Vec<i16> {
    samples.iter().copied().map(to_pcm16).collect()
}

/// Convert one normalized float sample to a signed integer of `bits` width,
/// using the same clamp-and-truncate rule as [`to_pcm16`].
pub(crate) fn to_pcm(sample: f32, bits: u16) -> i32 {
    if sample.is_nan() {
        return 0;
    }
    let full_scale = ((1i64 << (bits - 1)) - 1) as f64;
    (f64::from(sample.clamp(-1.0, 1.0)) * full_scale) as i32
}
