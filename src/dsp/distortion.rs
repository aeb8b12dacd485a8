//! Distortion Effect
//!
//! Per-sample gain boost of `1 + 5 * intensity` hard-clipped at full scale.

use super::to_sample;

/// Gain added per unit of intensity
const GAIN_PER_INTENSITY: f32 = 5.0;

pub(super) fn process(buffer: &[u8], intensity: f32) -> Vec<u8> {
    let gain = 1.0 + GAIN_PER_INTENSITY * intensity;

    buffer
        .iter()
        .map(|&s| to_sample(f32::from(s) * gain))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_intensity_is_identity() {
        // gain = 1, input already in [0, 255]
        let input: Vec<u8> = (0..=255).collect();
        assert_eq!(process(&input, 0.0), input);
    }

    #[test]
    fn test_gain_scales_samples() {
        let input = vec![10u8, 20, 40];
        let output = process(&input, 0.2); // gain = 2
        assert_eq!(output, vec![20, 40, 80]);
    }

    #[test]
    fn test_clips_at_full_scale() {
        let input = vec![100u8, 255];
        let output = process(&input, 2.0); // gain = 11
        assert_eq!(output, vec![255, 255]);
    }

    #[test]
    fn test_zero_samples_stay_zero() {
        let input = vec![0u8; 16];
        let output = process(&input, 2.0);
        assert!(output.iter().all(|&s| s == 0));
    }
}
