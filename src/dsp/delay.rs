//! Delay Effect
//!
//! Mixes the buffer 50/50 with a copy of itself shifted right by
//! `floor(1000 * intensity)` samples. Samples before the delay offset have
//! no shifted counterpart and mix against silence.

use super::to_sample;

/// Samples of delay per unit of intensity
const SAMPLES_PER_INTENSITY: f32 = 1000.0;

/// Dry/wet mix ratio (equal halves)
const MIX: f32 = 0.5;

pub(super) fn process(buffer: &[u8], intensity: f32) -> Vec<u8> {
    let delay_samples = (SAMPLES_PER_INTENSITY * intensity) as usize;

    buffer
        .iter()
        .enumerate()
        .map(|(i, &dry)| {
            // Zero delay degenerates to mixing the buffer with itself.
            let shifted = if i >= delay_samples {
                f32::from(buffer[i - delay_samples])
            } else {
                0.0
            };
            to_sample(f32::from(dry) * MIX + shifted * MIX)
        })
        .collect()
}
