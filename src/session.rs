//! Session State Controller
//!
//! Owns the lifecycle of the original/current/modified buffers and
//! orchestrates the effects engine and format bridge. This is the surface a
//! UI layer talks to: supply bytes and parameters, receive transformed bytes.
//!
//! State machine: `Empty -> Loaded -> {Processed, ImportedAudio}`, with
//! `reset` returning any post-load state back to `Loaded`. A failed
//! operation never leaves a partial mutation behind.

use std::fmt;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::audio::{reconcile_length, AudioClip, CompatWarning};
use crate::container::{as_sample_buffer, RawContainer, DEFAULT_HEADER_SIZE};
use crate::dsp::{apply_effect, EffectKind};
use crate::error::{GlitchError, Result};

/// Lifecycle states of a glitch session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No container loaded yet
    #[default]
    Empty,
    /// Container loaded, payload untouched
    Loaded,
    /// At least one effect applied to the working payload
    Processed,
    /// Working payload replaced by imported audio
    ImportedAudio,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Empty => write!(f, "Empty"),
            SessionState::Loaded => write!(f, "Loaded"),
            SessionState::Processed => write!(f, "Processed"),
            SessionState::ImportedAudio => write!(f, "ImportedAudio"),
        }
    }
}

/// Serializable snapshot of the session for reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub state: SessionState,
    pub header_size: usize,
    pub payload_len: usize,
    pub has_modified: bool,
}

/// One loaded container and its working buffers.
///
/// * `original` is immutable once set; it is the source of truth for reset.
/// * `current` is the working payload, replaced by effect or import output.
/// * `modified` is the reassembled container, recomputed after every
///   successful transformation and absent until the first one.
#[derive(Debug, Clone, Default)]
pub struct Session {
    header_size: usize,
    original: Option<RawContainer>,
    current: Vec<u8>,
    modified: Option<Vec<u8>>,
    state: SessionState,
}

impl Session {
    /// Create a session with the default 54-byte header size.
    pub fn new() -> Self {
        Self::with_header_size(DEFAULT_HEADER_SIZE)
    }

    /// Create a session with a custom header size.
    pub fn with_header_size(header_size: usize) -> Self {
        Session {
            header_size,
            original: None,
            current: Vec::new(),
            modified: None,
            state: SessionState::Empty,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Configured header size in bytes.
    pub fn header_size(&self) -> usize {
        self.header_size
    }

    /// The working payload.
    pub fn current_payload(&self) -> &[u8] {
        &self.current
    }

    /// Load raw container bytes, replacing any previous session content.
    ///
    /// Splits at the configured header size, stores the original and
    /// initializes the working payload from it. Clears any modified result.
    pub fn load(&mut self, bytes: &[u8]) -> Result<()> {
        let container = RawContainer::split(bytes, self.header_size)?;

        info!(
            "loaded container: {} header bytes, {} payload bytes",
            container.header.len(),
            container.payload.len()
        );

        self.current = container.payload.clone();
        self.original = Some(container);
        self.modified = None;
        self.state = SessionState::Loaded;
        Ok(())
    }

    /// Apply an effect to the working payload.
    ///
    /// On success the result becomes the new working payload and the
    /// modified container is recomputed. Returns the modified container
    /// bytes for preview.
    pub fn apply_effect(&mut self, kind: EffectKind, intensity: f32) -> Result<&[u8]> {
        let original = self.original.as_ref().ok_or(GlitchError::NoContainer)?;

        let samples = as_sample_buffer(&self.current);
        let processed = apply_effect(kind, samples, intensity)?;

        info!("applied {} at intensity {:.2}", kind, intensity);

        self.current = processed;
        self.modified = Some(RawContainer::join(&original.header, &self.current));
        self.state = SessionState::Processed;
        Ok(self.modified.as_deref().unwrap_or_default())
    }

    /// Export the working payload as a canonical audio clip. Read-only.
    pub fn export_audio(&self) -> Result<AudioClip> {
        if self.original.is_none() {
            return Err(GlitchError::NoContainer);
        }
        Ok(AudioClip::from_payload(as_sample_buffer(&self.current)))
    }

    /// Import an audio clip as the new working payload.
    ///
    /// Frame bytes are reconciled against the working payload length, so
    /// length drift from external tools never fails. A non-canonical clip
    /// format is surfaced as a warning alongside the preview bytes.
    pub fn import_audio(&mut self, clip: &AudioClip) -> Result<(&[u8], Option<CompatWarning>)> {
        let original = self.original.as_ref().ok_or(GlitchError::NoContainer)?;

        let warning = clip.check_compat();
        if let Some(w) = warning {
            warn!("{}", w);
        }

        self.current = reconcile_length(&clip.frames, self.current.len());
        self.modified = Some(RawContainer::join(&original.header, &self.current));
        self.state = SessionState::ImportedAudio;

        info!("imported {} audio frame bytes", clip.frames.len());

        Ok((self.modified.as_deref().unwrap_or_default(), warning))
    }

    /// The modified container bytes.
    ///
    /// # Errors
    /// `NothingToSave` until an effect has been applied or audio imported.
    pub fn save(&self) -> Result<&[u8]> {
        self.modified
            .as_deref()
            .ok_or(GlitchError::NothingToSave)
    }

    /// Restore the working payload from the original and discard the
    /// modified result. No-op on an empty session.
    pub fn reset(&mut self) {
        if let Some(original) = &self.original {
            self.current = original.payload.clone();
            self.modified = None;
            self.state = SessionState::Loaded;
            info!("session reset to original payload");
        }
    }

    /// Snapshot of the session for reporting.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            state: self.state,
            header_size: self.header_size,
            payload_len: self.current.len(),
            has_modified: self.modified.is_some(),
        }
    }
}
