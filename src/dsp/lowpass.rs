//! Low Pass Filter Effect
//!
//! 4th-order Butterworth low-pass with normalized cutoff `1 - 0.8 * intensity`
//! (higher intensity, stronger smoothing), applied as a causal filter with
//! zero initial state. Built as two cascaded cookbook biquads using the
//! Butterworth Q pair.
//!
//! The filter design requires a cutoff strictly inside (0, 1); the documented
//! intensity range can push the raw cutoff to the boundary, so it is clamped
//! to [0.01, 0.99] before design.

use std::f64::consts::PI;

use super::to_sample;

/// Cutoff reduction per unit of intensity
const CUTOFF_PER_INTENSITY: f32 = 0.8;

/// Valid normalized cutoff range for the biquad design
const MIN_CUTOFF: f64 = 0.01;
const MAX_CUTOFF: f64 = 0.99;

/// Q values of the two second-order sections of a 4th-order Butterworth
/// (1 / (2 cos(22.5 deg)) and 1 / (2 cos(67.5 deg)))
const BUTTERWORTH_Q: [f64; 2] = [0.541196100146197, 1.3065629648763766];

/// Biquad filter coefficients, normalized by a0.
/// Transfer function: H(z) = (b0 + b1*z^-1 + b2*z^-2) / (1 + a1*z^-1 + a2*z^-2)
#[derive(Debug, Clone, Copy)]
struct BiquadCoeffs {
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,
}

impl BiquadCoeffs {
    /// Low-pass coefficients from the Audio EQ Cookbook for a cutoff given
    /// as a fraction of Nyquist.
    fn low_pass(normalized_cutoff: f64, q: f64) -> Self {
        let w0 = PI * normalized_cutoff;
        let cos_w0 = w0.cos();
        let alpha = w0.sin() / (2.0 * q);

        let b0 = (1.0 - cos_w0) / 2.0;
        let b1 = 1.0 - cos_w0;
        let b2 = (1.0 - cos_w0) / 2.0;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_w0;
        let a2 = 1.0 - alpha;

        BiquadCoeffs {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
        }
    }
}

/// Biquad delay-line state (Direct Form I)
#[derive(Debug, Clone, Copy, Default)]
struct BiquadState {
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl BiquadState {
    fn process(&mut self, input: f64, coeffs: &BiquadCoeffs) -> f64 {
        let output = coeffs.b0 * input + coeffs.b1 * self.x1 + coeffs.b2 * self.x2
            - coeffs.a1 * self.y1
            - coeffs.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }
}

pub(super) fn process(buffer: &[u8], intensity: f32) -> Vec<u8> {
    let cutoff =
        f64::from(1.0 - CUTOFF_PER_INTENSITY * intensity).clamp(MIN_CUTOFF, MAX_CUTOFF);

    let sections: Vec<BiquadCoeffs> = BUTTERWORTH_Q
        .iter()
        .map(|&q| BiquadCoeffs::low_pass(cutoff, q))
        .collect();
    let mut states = [BiquadState::default(); 2];

    buffer
        .iter()
        .map(|&sample| {
            let mut value = f64::from(sample);
            for (coeffs, state) in sections.iter().zip(states.iter_mut()) {
                value = state.process(value, coeffs);
            }
            to_sample(value as f32)
        })
        .collect()
}
