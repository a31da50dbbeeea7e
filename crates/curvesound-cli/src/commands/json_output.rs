//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag on
//! `validate`, `render`, and `inspect`.

use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: CLI_XXX for CLI-level errors; validation and backend codes pass
/// through unchanged.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_003";
    /// File is not a canonical PCM WAV
    pub const INVALID_WAV: &str = "CLI_004";
}

/// Warning codes for CLI operations.
pub mod warning_codes {
    /// Samples replaced by silence after probe misses
    pub const PROBE_MISSES: &str = "CLI_W001";
    /// Header size fields disagree with the file
    pub const INCONSISTENT_HEADER: &str = "CLI_W002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E002", "AUDIO_006")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001", "CLI_W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the JSON path for this warning.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Canonical request hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_hash: Option<String>,
    /// BLAKE3 hash of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

impl ValidateOutput {
    /// Creates a validate output; `success` follows from `errors`.
    pub fn new(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        request_hash: Option<String>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: errors.is_empty(),
            errors,
            warnings,
            request_hash,
            source_hash,
        }
    }
}

/// JSON output for the `render` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOutput {
    /// Whether rendering succeeded
    pub success: bool,
    /// Errors encountered during rendering
    pub errors: Vec<JsonError>,
    /// Warnings from validation/rendering
    pub warnings: Vec<JsonWarning>,
    /// Render result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RenderResult>,
}

/// Render result details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderResult {
    /// Path the WAV was written to
    pub output: String,
    /// Number of samples
    pub num_samples: usize,
    /// Samples in one waveform cycle
    pub samples_per_cycle: usize,
    /// Samples rendered as silence after a probe miss
    pub probe_misses: usize,
    /// Total file size in bytes
    pub file_size: usize,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
    /// Canonical request hash
    pub request_hash: String,
    /// Whether playback was started
    pub played: bool,
}

impl RenderOutput {
    /// Creates a successful render output.
    pub fn success(result: RenderResult, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed render output.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
        }
    }
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    /// Whether the file parsed as a canonical WAV
    pub success: bool,
    /// Errors encountered while reading
    pub errors: Vec<JsonError>,
    /// Consistency warnings
    pub warnings: Vec<JsonWarning>,
    /// Header fields (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
}

/// Header fields and derived values of an inspected WAV file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectResult {
    /// Audio format tag (1 = PCM)
    pub audio_format: u16,
    /// Number of channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Bytes per second
    pub byte_rate: u32,
    /// Bytes per sample frame
    pub block_align: u16,
    /// Data chunk size in bytes
    pub data_size: u32,
    /// Number of sample frames
    pub num_samples: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
}

impl InspectOutput {
    /// Creates a successful inspect output.
    pub fn success(result: InspectResult, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed inspect output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            warnings: Vec::new(),
            result: None,
        }
    }
}

/// Converts an InputError to a JsonError.
pub fn input_error_to_json(err: &InputError, file: &str) -> JsonError {
    let code = match err {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
    };
    JsonError::new(code, err.to_string()).with_file(file)
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &curvesound_spec::ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &curvesound_spec::ValidationWarning) -> JsonWarning {
    let mut warning = JsonWarning::new(warn.code.to_string(), &warn.message);
    if let Some(ref path) = warn.path {
        warning = warning.with_path(path);
    }
    warning
}

/// Converts a backend error to JsonErrors.
///
/// Validation failures expand into one entry per validation error.
pub fn audio_error_to_json(err: &curvesound_backend_audio::AudioError) -> Vec<JsonError> {
    use curvesound_backend_audio::AudioError;
    use curvesound_spec::BackendError;

    match err {
        AudioError::InvalidRequest(errors) => errors.iter().map(validation_error_to_json).collect(),
        other => vec![JsonError::new(other.code(), other.to_string())],
    }
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvesound_backend_audio::{AudioError, CurveRole};
    use curvesound_spec::{ErrorCode, ValidationError, ValidationWarning, WarningCode};

    #[test]
    fn test_json_error_serialization() {
        let error = JsonError::new("E002", "test error")
            .with_path("frequency_hz")
            .with_file("request.json");

        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"E002\""));
        assert!(json.contains("\"message\":\"test error\""));
        assert!(json.contains("\"path\":\"frequency_hz\""));
        assert!(json.contains("\"file\":\"request.json\""));
    }

    #[test]
    fn test_json_error_optional_fields_skipped() {
        let error = JsonError::new("E001", "test error");
        let json = serde_json::to_string(&error).unwrap();

        assert!(!json.contains("\"path\""));
        assert!(!json.contains("\"file\""));
    }

    #[test]
    fn test_validation_conversions_keep_code_and_path() {
        let err = ValidationError::with_path(ErrorCode::CurveTooShort, "too short", "waveform.points");
        let json = validation_error_to_json(&err);
        assert_eq!(json.code, "E006");
        assert_eq!(json.path.as_deref(), Some("waveform.points"));

        let warn = ValidationWarning::new(WarningCode::PitchCurveIgnored, "ignored");
        let json = validation_warning_to_json(&warn);
        assert_eq!(json.code, "W001");
        assert_eq!(json.path, None);
    }

    #[test]
    fn test_audio_error_expands_validation_errors() {
        let err = AudioError::InvalidRequest(vec![
            ValidationError::new(ErrorCode::InvalidFrequency, "a"),
            ValidationError::new(ErrorCode::InvalidDuration, "b"),
        ]);
        let errors = audio_error_to_json(&err);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].code, "E002");
        assert_eq!(errors[1].code, "E005");

        let err = AudioError::ProbeMiss {
            curve: CurveRole::Waveform,
            index: 7,
            x: 0.25,
        };
        let errors = audio_error_to_json(&err);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "AUDIO_006");
    }

    #[test]
    fn test_validate_output_success_follows_errors() {
        let output = ValidateOutput::new(vec![], vec![], Some("abc".to_string()), None);
        assert!(output.success);

        let output = ValidateOutput::new(vec![JsonError::new("E001", "x")], vec![], None, None);
        assert!(!output.success);
        let json = serde_json::to_string(&output).unwrap();
        assert!(!json.contains("request_hash"));
    }

    #[test]
    fn test_render_output_failure_has_no_result() {
        let output = RenderOutput::failure(vec![JsonError::new("CLI_001", "missing")], vec![]);
        assert!(!output.success);
        assert!(output.result.is_none());
        let json = serde_json::to_string(&output).unwrap();
        assert!(!json.contains("\"result\""));
    }
}
