//! Byte-Stream Effects Engine
//!
//! Six independent, stateless transformations over a buffer of unsigned
//! 8-bit samples plus an intensity scalar in [0, 2]. Every effect preserves
//! buffer length, accumulates in f32 and clamps to [0, 255] before casting
//! back to u8.

mod delay;
mod distortion;
mod echo;
mod lowpass;
mod pitch;
mod reverb;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{GlitchError, Result};

/// Maximum effect intensity (slider value 100 / 50)
pub const MAX_INTENSITY: f32 = 2.0;

/// Closed set of byte-stream effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Mix the buffer with a shifted copy of itself
    Delay,
    /// Four decaying delay taps accumulated onto the signal
    Reverb,
    /// Gain boost hard-clipped at full scale
    Distortion,
    /// Single long delay tap with fixed decay
    Echo,
    /// Crude resampling approximation of a pitch change
    PitchShift,
    /// 4th-order Butterworth low-pass smoothing
    LowPass,
}

impl EffectKind {
    /// All effect kinds in presentation order
    pub const ALL: [EffectKind; 6] = [
        EffectKind::Delay,
        EffectKind::Reverb,
        EffectKind::Distortion,
        EffectKind::Echo,
        EffectKind::PitchShift,
        EffectKind::LowPass,
    ];

    /// Stable string identifier
    pub fn id(self) -> &'static str {
        match self {
            EffectKind::Delay => "delay",
            EffectKind::Reverb => "reverb",
            EffectKind::Distortion => "distortion",
            EffectKind::Echo => "echo",
            EffectKind::PitchShift => "pitch_shift",
            EffectKind::LowPass => "low_pass",
        }
    }

    /// Human-readable display name
    pub fn display_name(self) -> &'static str {
        match self {
            EffectKind::Delay => "Delay",
            EffectKind::Reverb => "Reverb",
            EffectKind::Distortion => "Distortion",
            EffectKind::Echo => "Echo",
            EffectKind::PitchShift => "Pitch Shift",
            EffectKind::LowPass => "Low Pass Filter",
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Apply an effect to a sample buffer, returning a new same-length buffer.
///
/// # Errors
/// * `InvalidIntensity` - intensity outside [0, 2] or not finite
/// * `EmptyPayload` - the buffer contains no samples
pub fn apply_effect(kind: EffectKind, buffer: &[u8], intensity: f32) -> Result<Vec<u8>> {
    if !intensity.is_finite() || !(0.0..=MAX_INTENSITY).contains(&intensity) {
        return Err(GlitchError::InvalidIntensity { value: intensity });
    }
    if buffer.is_empty() {
        return Err(GlitchError::EmptyPayload);
    }

    let output = match kind {
        EffectKind::Delay => delay::process(buffer, intensity),
        EffectKind::Reverb => reverb::process(buffer, intensity),
        EffectKind::Distortion => distortion::process(buffer, intensity),
        EffectKind::Echo => echo::process(buffer, intensity),
        EffectKind::PitchShift => pitch::process(buffer, intensity),
        EffectKind::LowPass => lowpass::process(buffer, intensity),
    };

    debug_assert_eq!(output.len(), buffer.len());
    Ok(output)
}

/// Map a 1-100 UI slider value onto the [0, 2] intensity range.
pub fn slider_to_intensity(slider: u8) -> f32 {
    f32::from(slider) / 50.0
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Clamp an accumulated sample to [0, 255] and cast back to u8.
#[inline]
pub(crate) fn to_sample(value: f32) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

/// Rescale the whole buffer by `255 / max` when any sample exceeds full
/// scale, so overlapping taps clip by normalization rather than wrapping.
pub(crate) fn rescale_if_clipping(output: &mut [f32]) {
    let max = output.iter().copied().fold(0.0_f32, f32::max);
    if max > 255.0 {
        let scale = 255.0 / max;
        for sample in output.iter_mut() {
            *sample *= scale;
        }
    }
}
