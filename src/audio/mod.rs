//! Format Bridge
//!
//! Converts a container payload to and from an external audio representation
//! and reconciles buffers of differing lengths when round-tripping through an
//! outside tool. The canonical form written by this crate is mono, 8-bit,
//! 44100 Hz; anything else is flagged but still processed.

pub mod wav;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical sample rate in Hz
pub const SAMPLE_RATE: u32 = 44_100;

/// Canonical channel count (mono)
pub const CANONICAL_CHANNELS: u16 = 1;

/// Canonical sample width in bytes (8-bit)
pub const CANONICAL_SAMPLE_WIDTH: u16 = 1;

/// An in-memory audio container: format fields plus raw frame bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioClip {
    /// Number of interleaved channels
    pub channels: u16,
    /// Bytes per sample
    pub sample_width_bytes: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Raw frame bytes
    pub frames: Vec<u8>,
}

impl AudioClip {
    /// Wrap a container payload verbatim as canonical mono 8-bit audio.
    /// Sample values are not transformed.
    pub fn from_payload(payload: &[u8]) -> Self {
        AudioClip {
            channels: CANONICAL_CHANNELS,
            sample_width_bytes: CANONICAL_SAMPLE_WIDTH,
            sample_rate: SAMPLE_RATE,
            frames: payload.to_vec(),
        }
    }

    /// Check the clip against the canonical format.
    ///
    /// Non-canonical clips still process (the frames are consumed as raw
    /// bytes either way), but the mismatch is surfaced to the caller.
    pub fn check_compat(&self) -> Option<CompatWarning> {
        if self.channels != CANONICAL_CHANNELS || self.sample_width_bytes != CANONICAL_SAMPLE_WIDTH
        {
            Some(CompatWarning {
                channels: self.channels,
                sample_width_bytes: self.sample_width_bytes,
            })
        } else {
            None
        }
    }
}

/// Non-fatal warning: imported audio is not mono 8-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatWarning {
    pub channels: u16,
    pub sample_width_bytes: u16,
}

impl fmt::Display for CompatWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "audio is {} channel(s) at {} byte(s)/sample; mono 8-bit gives best results",
            self.channels, self.sample_width_bytes
        )
    }
}

/// Reconcile externally-sourced frame bytes against a fixed target length.
///
/// The container's payload region has a fixed size baked into its header
/// geometry, but a round trip through an external audio tool can drift the
/// sample count. Longer input is truncated; shorter input is zero-padded on
/// the right. Always returns exactly `target_len` bytes; this is a recovery
/// mechanism, not an error path.
pub fn reconcile_length(frames: &[u8], target_len: usize) -> Vec<u8> {
    let mut reconciled = frames[..frames.len().min(target_len)].to_vec();
    reconciled.resize(target_len, 0);
    reconciled
}
