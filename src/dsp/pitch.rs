//! Pitch Shift Effect
//!
//! Deliberately crude pitch change by nearest-sample resampling at a rate of
//! `1 + (intensity - 1) * 0.2` (range 0.8 to 1.2). Not a true pitch shift:
//! no windowing, no overlap-add. The resampled stream is zero-padded or
//! truncated back to the original length.

/// Resampling rate swing per unit of intensity away from 1.0
const FACTOR_SWING: f32 = 0.2;

pub(super) fn process(buffer: &[u8], intensity: f32) -> Vec<u8> {
    let factor = f64::from(1.0 + (intensity - 1.0) * FACTOR_SWING);
    let len = buffer.len();

    let mut output = Vec::with_capacity(len);
    let mut k = 0u64;
    loop {
        let index = (k as f64 * factor) as usize;
        if index >= len || output.len() == len {
            break;
        }
        output.push(buffer[index]);
        k += 1;
    }

    // Stretching below unity rate runs out of source before filling the
    // original length; pad the remainder with silence.
    output.resize(len, 0);
    output
}
