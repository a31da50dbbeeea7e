//! Error types for the audio backend.

use curvesound_spec::{BackendError, ValidationError};
use thiserror::Error;

use crate::probe::CurveRole;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis, encoding, or playback.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Request failed validation.
    #[error("invalid request: {}", format_validation_errors(.0))]
    InvalidRequest(Vec<ValidationError>),

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: u32,
    },

    /// Invalid amplitude.
    #[error("invalid amplitude: {amplitude}")]
    InvalidAmplitude {
        /// The invalid amplitude.
        amplitude: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// A probe found no intersection with its curve.
    #[error("{curve} probe found no intersection at sample {index} (x = {x})")]
    ProbeMiss {
        /// Curve being probed.
        curve: CurveRole,
        /// Sample index.
        index: usize,
        /// Absolute X of the probe.
        x: f64,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Playback sink failed to start.
    #[error("playback error: {message}")]
    Playback {
        /// Error message.
        message: String,
    },
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a playback error.
    pub fn playback(message: impl Into<String>) -> Self {
        Self::Playback {
            message: message.into(),
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidRequest(_) => "AUDIO_001",
            AudioError::InvalidFrequency { .. } => "AUDIO_002",
            AudioError::InvalidDuration { .. } => "AUDIO_003",
            AudioError::InvalidAmplitude { .. } => "AUDIO_004",
            AudioError::InvalidParameter { .. } => "AUDIO_005",
            AudioError::ProbeMiss { .. } => "AUDIO_006",
            AudioError::Io(_) => "AUDIO_007",
            AudioError::Playback { .. } => "AUDIO_008",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            AudioError::Playback { .. } => "playback",
            _ => "audio",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvesound_spec::ErrorCode;

    #[test]
    fn test_invalid_param_helper() {
        let err = AudioError::invalid_param("waveform", "curve has no points");
        assert!(err.to_string().contains("waveform"));
        assert!(err.to_string().contains("no points"));
        assert_eq!(err.code(), "AUDIO_005");
    }

    #[test]
    fn test_probe_miss_names_curve_and_index() {
        let err = AudioError::ProbeMiss {
            curve: CurveRole::Envelope,
            index: 1234,
            x: 0.5,
        };
        let message = err.to_string();
        assert!(message.contains("envelope"));
        assert!(message.contains("1234"));
        assert_eq!(err.category(), "audio");
    }

    #[test]
    fn test_invalid_request_lists_errors() {
        let err = AudioError::InvalidRequest(vec![
            ValidationError::with_path(ErrorCode::InvalidFrequency, "bad", "frequency_hz"),
            ValidationError::new(ErrorCode::InvalidDuration, "zero"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid request: E002: bad (at frequency_hz); E005: zero"
        );
    }

    #[test]
    fn test_playback_category() {
        let err = AudioError::playback("no player");
        assert_eq!(err.category(), "playback");
        assert_eq!(err.code(), "AUDIO_008");
    }
}
