//! Error types for request validation and processing.

use thiserror::Error;

/// Error codes for request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Unsupported request_version
    UnsupportedRequestVersion,
    /// E002: Frequency is not a finite positive number
    InvalidFrequency,
    /// E003: Frequency leaves less than one sample per cycle
    DegenerateCycle,
    /// E004: Amplitude is not finite
    InvalidAmplitude,
    /// E005: Duration is zero or above the maximum
    InvalidDuration,
    /// E006: Curve has fewer than two points
    CurveTooShort,
    /// E007: Curve has a non-finite coordinate
    NonFiniteCoordinate,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnsupportedRequestVersion => "E001",
            ErrorCode::InvalidFrequency => "E002",
            ErrorCode::DegenerateCycle => "E003",
            ErrorCode::InvalidAmplitude => "E004",
            ErrorCode::InvalidDuration => "E005",
            ErrorCode::CurveTooShort => "E006",
            ErrorCode::NonFiniteCoordinate => "E007",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Pitch curve supplied but not used
    PitchCurveIgnored,
    /// W002: Amplitude above full scale, samples will clip
    AmplitudeClipping,
    /// W003: Waveform curve does not cover one unit of X
    WaveformSpanShort,
    /// W004: Envelope curve does not cover one unit of X
    EnvelopeSpanShort,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::PitchCurveIgnored => "W001",
            WarningCode::AmplitudeClipping => "W002",
            WarningCode::WaveformSpanShort => "W003",
            WarningCode::EnvelopeSpanShort => "W004",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "waveform.points\[3\]").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for request operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Request validation failed with one or more errors.
    #[error("request validation failed with {0} error(s)")]
    ValidationFailed(usize),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of request validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Creates a failed validation result.
    pub fn failure(errors: Vec<ValidationError>) -> Self {
        Self {
            ok: false,
            errors,
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Returns true if any error carries the given code.
    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Returns true if any warning carries the given code.
    pub fn has_warning(&self, code: WarningCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for backend errors.
///
/// Each backend error type implements this trait so callers can report a
/// stable code and category without knowing the concrete type.
pub trait BackendError: std::error::Error {
    /// Stable error code such as "AUDIO_001".
    fn code(&self) -> &'static str;

    /// Human-readable message. Defaults to `Display`.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category such as "audio" or "playback".
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::UnsupportedRequestVersion.code(), "E001");
        assert_eq!(ErrorCode::InvalidFrequency.code(), "E002");
        assert_eq!(ErrorCode::DegenerateCycle.code(), "E003");
        assert_eq!(ErrorCode::NonFiniteCoordinate.code(), "E007");
    }

    #[test]
    fn test_warning_codes() {
        assert_eq!(WarningCode::PitchCurveIgnored.code(), "W001");
        assert_eq!(WarningCode::EnvelopeSpanShort.code(), "W004");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ErrorCode::InvalidFrequency, "must be positive");
        assert_eq!(err.to_string(), "E002: must be positive");

        let err_with_path = ValidationError::with_path(
            ErrorCode::CurveTooShort,
            "needs at least 2 points",
            "envelope.points",
        );
        assert_eq!(
            err_with_path.to_string(),
            "E006: needs at least 2 points (at envelope.points)"
        );
    }

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::success();
        assert!(result.is_ok());

        result.add_warning(ValidationWarning::new(
            WarningCode::AmplitudeClipping,
            "loud",
        ));
        assert!(result.is_ok());
        assert!(result.has_warning(WarningCode::AmplitudeClipping));

        result.add_error(ValidationError::new(ErrorCode::InvalidDuration, "zero"));
        assert!(!result.is_ok());
        assert!(result.has_error(ErrorCode::InvalidDuration));
        assert_eq!(result.into_result().unwrap_err().len(), 1);
    }
}
