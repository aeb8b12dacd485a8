//! Reverb Effect
//!
//! Additive delay-and-decay reverb: four taps at multiples of
//! `200 * intensity` samples, each decayed by `0.4 / k`, accumulated onto
//! the dry signal. Not a convolution reverb. If accumulation exceeds full
//! scale the whole buffer is rescaled so the peak lands exactly at 255.

use super::{rescale_if_clipping, to_sample};

/// Number of delay taps
const NUM_TAPS: usize = 4;

/// Base tap spacing in samples per unit of intensity
const TAP_SPACING: f32 = 200.0;

/// Decay numerator; tap k decays by DECAY_BASE / k
const DECAY_BASE: f32 = 0.4;

pub(super) fn process(buffer: &[u8], intensity: f32) -> Vec<u8> {
    let mut output: Vec<f32> = buffer.iter().map(|&s| f32::from(s)).collect();

    for k in 1..=NUM_TAPS {
        let delay = (TAP_SPACING * k as f32 * intensity) as usize;
        // A tap past the end of the buffer contributes nothing.
        if delay >= buffer.len() {
            continue;
        }
        let decay = DECAY_BASE / k as f32;

        if delay == 0 {
            for (out, &dry) in output.iter_mut().zip(buffer.iter()) {
                *out += f32::from(dry) * decay;
            }
        } else {
            for i in delay..buffer.len() {
                output[i] += f32::from(buffer[i - delay]) * decay;
            }
        }
    }

    rescale_if_clipping(&mut output);
    output.into_iter().map(to_sample).collect()
}
