//! Error handling for glitchwave
//!
//! All core operations return a `Result` rather than aborting; a failed
//! operation leaves the session in its prior state.

use thiserror::Error;

/// Result type alias for glitchwave operations
pub type Result<T> = std::result::Result<T, GlitchError>;

/// Main error type for glitchwave operations
#[derive(Error, Debug)]
pub enum GlitchError {
    // Container Errors
    #[error("Container too short: {len} bytes, need at least {header_size} for the header")]
    ContainerTooShort { len: usize, header_size: usize },

    // Effect Parameter Errors
    #[error("Intensity out of range: {value} (expected 0.0 to 2.0)")]
    InvalidIntensity { value: f32 },

    #[error("Effect applied to an empty sample buffer")]
    EmptyPayload,

    // Session Errors
    #[error("No container loaded")]
    NoContainer,

    #[error("Nothing to save: no effect applied or audio imported yet")]
    NothingToSave,

    // Audio Container Errors
    #[error("Invalid WAV file: {reason}")]
    InvalidWav {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported WAV format: {format}")]
    UnsupportedWav { format: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GlitchError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            GlitchError::ContainerTooShort { .. } => "CONTAINER_TOO_SHORT",
            GlitchError::InvalidIntensity { .. } => "INVALID_INTENSITY",
            GlitchError::EmptyPayload => "EMPTY_PAYLOAD",
            GlitchError::NoContainer => "NO_CONTAINER",
            GlitchError::NothingToSave => "NOTHING_TO_SAVE",
            GlitchError::InvalidWav { .. } => "INVALID_WAV",
            GlitchError::UnsupportedWav { .. } => "UNSUPPORTED_WAV",
            GlitchError::Io(_) => "IO_ERROR",
            GlitchError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            GlitchError::ContainerTooShort { .. } => vec![
                "Check the file is an uncompressed BMP",
                "Adjust --header-size if the image uses a non-standard header",
            ],
            GlitchError::InvalidIntensity { .. } => vec![
                "Intensity maps from the 1-100 slider by dividing by 50",
                "Pass a slider value between 1 and 100",
            ],
            GlitchError::NoContainer => vec!["Load an image before applying effects"],
            GlitchError::NothingToSave => vec![
                "Apply an effect or import audio first",
                "Saving the unmodified original would be a copy, not a glitch",
            ],
            GlitchError::InvalidWav { .. } => vec![
                "Check the file plays in an audio application",
                "Re-export from the external tool as uncompressed PCM",
            ],
            _ => vec![],
        }
    }
}
