//! WAV file I/O for the format bridge
//!
//! Writes the canonical clip as uncompressed 8-bit mono PCM and reads WAVs
//! back as raw frame bytes for reconciliation. 8-bit and 16-bit integer
//! input is accepted; other formats are rejected rather than guessed at.

use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::audio::AudioClip;
use crate::error::{GlitchError, Result};

/// Write a clip to a WAV file.
///
/// Only the canonical mono 8-bit form is produced here; the frames are
/// written verbatim as unsigned 8-bit PCM.
pub fn write_wav(clip: &AudioClip, path: &Path) -> Result<()> {
    let spec = WavSpec {
        channels: clip.channels,
        sample_rate: clip.sample_rate,
        bits_per_sample: 8,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).map_err(wav_io_error)?;

    for &sample in &clip.frames {
        // hound exposes 8-bit PCM as signed; WAV stores it unsigned
        let signed = (i16::from(sample) - 128) as i8;
        writer.write_sample(signed).map_err(wav_io_error)?;
    }

    writer.finalize().map_err(wav_io_error)?;
    Ok(())
}

/// Read a WAV file into an [`AudioClip`].
///
/// The frames come back as raw bytes: 8-bit samples map one byte each,
/// 16-bit samples contribute two little-endian bytes. The bridge consumes
/// them as an opaque byte stream regardless.
pub fn read_wav(path: &Path) -> Result<AudioClip> {
    let reader = WavReader::open(path).map_err(|e| GlitchError::InvalidWav {
        reason: format!("failed to open WAV file: {}", e),
        source: Some(Box::new(e)),
    })?;

    let spec = reader.spec();

    if spec.sample_format != SampleFormat::Int {
        return Err(GlitchError::UnsupportedWav {
            format: "float samples (only integer PCM supported)".to_string(),
        });
    }

    let frames = match spec.bits_per_sample {
        8 => read_frames_u8(reader)?,
        16 => read_frames_i16(reader)?,
        bits => {
            return Err(GlitchError::UnsupportedWav {
                format: format!("{}-bit integer audio (only 8 and 16 supported)", bits),
            })
        }
    };

    Ok(AudioClip {
        channels: spec.channels,
        sample_width_bytes: (spec.bits_per_sample / 8).max(1),
        sample_rate: spec.sample_rate,
        frames,
    })
}

fn read_frames_u8<R: std::io::Read>(mut reader: WavReader<R>) -> Result<Vec<u8>> {
    reader
        .samples::<i8>()
        .map(|s| s.map(|v| (i16::from(v) + 128) as u8))
        .collect::<std::result::Result<Vec<u8>, _>>()
        .map_err(|e| GlitchError::InvalidWav {
            reason: format!("failed to read 8-bit samples: {}", e),
            source: Some(Box::new(e)),
        })
}

fn read_frames_i16<R: std::io::Read>(mut reader: WavReader<R>) -> Result<Vec<u8>> {
    let mut frames = Vec::new();
    for sample in reader.samples::<i16>() {
        let sample = sample.map_err(|e| GlitchError::InvalidWav {
            reason: format!("failed to read 16-bit samples: {}", e),
            source: Some(Box::new(e)),
        })?;
        frames.extend_from_slice(&sample.to_le_bytes());
    }
    Ok(frames)
}

fn wav_io_error(e: hound::Error) -> GlitchError {
    GlitchError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        e.to_string(),
    ))
}
