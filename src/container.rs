//! Raw Container Model
//!
//! Splits and reassembles a binary image container into an opaque header and
//! a mutable payload. The model is format-agnostic below the header boundary:
//! nothing in the header is parsed or validated, it is sliced at the
//! configured offset and copied verbatim on every reconstruction.

use crate::error::{GlitchError, Result};

/// Default header size in bytes (standard 24-bit BMP header)
pub const DEFAULT_HEADER_SIZE: usize = 54;

/// An uncompressed image container split at the header boundary.
///
/// `header` is never transformed; `payload` is the byte region that the
/// effects engine and format bridge operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawContainer {
    /// Opaque header bytes, copied verbatim on reconstruction
    pub header: Vec<u8>,
    /// Pixel payload, each byte an unsigned sample in [0, 255]
    pub payload: Vec<u8>,
}

impl RawContainer {
    /// Split raw container bytes at `header_size`.
    ///
    /// # Errors
    /// `ContainerTooShort` if the input cannot hold the configured header.
    pub fn split(bytes: &[u8], header_size: usize) -> Result<Self> {
        if bytes.len() < header_size {
            return Err(GlitchError::ContainerTooShort {
                len: bytes.len(),
                header_size,
            });
        }

        Ok(RawContainer {
            header: bytes[..header_size].to_vec(),
            payload: bytes[header_size..].to_vec(),
        })
    }

    /// Reassemble the container: header followed by payload, no validation.
    pub fn join(header: &[u8], payload: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(header.len() + payload.len());
        bytes.extend_from_slice(header);
        bytes.extend_from_slice(payload);
        bytes
    }

    /// Reassemble this container's own header and payload.
    pub fn to_bytes(&self) -> Vec<u8> {
        Self::join(&self.header, &self.payload)
    }
}

/// Reinterpret a pixel payload as a buffer of unsigned 8-bit audio samples.
///
/// The bytes are already u8; this exists so the image-to-audio boundary is
/// an explicit, named conversion rather than an implicit reinterpretation.
#[inline]
pub fn as_sample_buffer(payload: &[u8]) -> &[u8] {
    payload
}
