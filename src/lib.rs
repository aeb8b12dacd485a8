//! glitchwave - Audio-Domain Glitch Art Engine
//!
//! Reinterprets the pixel payload of an uncompressed bitmap as a stream of
//! unsigned 8-bit audio samples, applies signal-processing transformations
//! to that stream, and writes the transformed bytes back into the image
//! container. The visual artifacts are side effects of audio-domain math.
//!
//! # Architecture
//!
//! - `container`: splits/reassembles a binary container into an opaque
//!   header and a mutable payload
//! - `dsp`: six stateless byte-stream effects (delay, reverb, distortion,
//!   echo, pitch shift, low-pass)
//! - `audio`: the format bridge to/from WAV, including length
//!   reconciliation for externally round-tripped audio
//! - `session`: lifecycle of the original/current/modified buffers and the
//!   interface consumed by UI layers

pub mod audio;
pub mod cli;
pub mod container;
pub mod dsp;
pub mod error;
pub mod session;

pub use error::{GlitchError, Result};
