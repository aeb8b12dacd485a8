//! Echo Effect
//!
//! One long delay tap at `floor(2000 * intensity)` samples with a fixed 0.6
//! decay added onto the dry signal, rescaled when accumulation exceeds full
//! scale. A delay past the end of the buffer leaves the input unchanged.

use super::{rescale_if_clipping, to_sample};

/// Samples of delay per unit of intensity
const SAMPLES_PER_INTENSITY: f32 = 2000.0;

/// Fixed echo decay
const DECAY: f32 = 0.6;

pub(super) fn process(buffer: &[u8], intensity: f32) -> Vec<u8> {
    let delay_samples = (SAMPLES_PER_INTENSITY * intensity) as usize;
    let mut output: Vec<f32> = buffer.iter().map(|&s| f32::from(s)).collect();

    if delay_samples < buffer.len() {
        if delay_samples == 0 {
            for (out, &dry) in output.iter_mut().zip(buffer.iter()) {
                *out += f32::from(dry) * DECAY;
            }
        } else {
            for i in delay_samples..buffer.len() {
                output[i] += f32::from(buffer[i - delay_samples]) * DECAY;
            }
        }
    }

    rescale_if_clipping(&mut output);
    output.into_iter().map(to_sample).collect()
}
