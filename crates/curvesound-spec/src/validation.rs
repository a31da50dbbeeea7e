//! Request validation logic.

use crate::curve::Polyline;
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::request::{
    samples_per_cycle, SynthesisRequest, MAX_DURATION_SECONDS, REQUEST_VERSION, SAMPLE_RATE,
};

/// How far short of a full unit a curve's X extent may fall before warning.
const SPAN_WARNING_SLACK: f64 = 0.01;

/// Validates a synthesis request.
///
/// Errors block generation. Warnings describe requests that will render but
/// probably not as intended (clipping, probes likely to miss, ignored input).
///
/// # Example
/// ```
/// use curvesound_spec::{validate_request, SynthesisRequest};
///
/// let result = validate_request(&SynthesisRequest::reference());
/// assert!(result.is_ok());
/// ```
pub fn validate_request(request: &SynthesisRequest) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_version(request, &mut result);
    validate_frequency(request, &mut result);
    validate_amplitude(request, &mut result);
    validate_duration(request, &mut result);

    let waveform_ok = validate_curve(&request.waveform, "waveform", &mut result);
    let envelope_ok = validate_curve(&request.envelope, "envelope", &mut result);
    if let Some(ref pitch) = request.pitch {
        validate_curve(pitch, "pitch", &mut result);
        result.add_warning(ValidationWarning::with_path(
            WarningCode::PitchCurveIgnored,
            "pitch curve is reserved and does not affect the rendered samples",
            "pitch",
        ));
    }

    if waveform_ok {
        check_unit_span(
            &request.waveform,
            "waveform",
            WarningCode::WaveformSpanShort,
            &mut result,
        );
    }
    if envelope_ok {
        check_unit_span(
            &request.envelope,
            "envelope",
            WarningCode::EnvelopeSpanShort,
            &mut result,
        );
    }

    result
}

fn validate_version(request: &SynthesisRequest, result: &mut ValidationResult) {
    if request.request_version != REQUEST_VERSION {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedRequestVersion,
            format!(
                "request_version must be {}, got {}",
                REQUEST_VERSION, request.request_version
            ),
            "request_version",
        ));
    }
}

fn validate_frequency(request: &SynthesisRequest, result: &mut ValidationResult) {
    let freq = request.frequency_hz;
    if !freq.is_finite() || freq <= 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidFrequency,
            format!("frequency_hz must be a finite number above 0, got {}", freq),
            "frequency_hz",
        ));
    } else if samples_per_cycle(freq).is_none() {
        result.add_error(ValidationError::with_path(
            ErrorCode::DegenerateCycle,
            format!(
                "frequency_hz {} leaves less than one sample per cycle at {} Hz",
                freq, SAMPLE_RATE
            ),
            "frequency_hz",
        ));
    }
}

fn validate_amplitude(request: &SynthesisRequest, result: &mut ValidationResult) {
    let amplitude = request.amplitude;
    if !amplitude.is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAmplitude,
            format!("amplitude must be finite, got {}", amplitude),
            "amplitude",
        ));
    } else if amplitude.abs() > 1.0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::AmplitudeClipping,
            format!(
                "amplitude {} exceeds full scale; loud samples will be clamped",
                amplitude
            ),
            "amplitude",
        ));
    }
}

fn validate_duration(request: &SynthesisRequest, result: &mut ValidationResult) {
    let duration = request.duration_seconds;
    if duration == 0 || duration > MAX_DURATION_SECONDS {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDuration,
            format!(
                "duration_seconds must be between 1 and {}, got {}",
                MAX_DURATION_SECONDS, duration
            ),
            "duration_seconds",
        ));
    }
}

/// Checks point count and coordinates. Returns true if the curve is usable.
fn validate_curve(curve: &Polyline, name: &str, result: &mut ValidationResult) -> bool {
    if curve.points.len() < 2 {
        result.add_error(ValidationError::with_path(
            ErrorCode::CurveTooShort,
            format!(
                "{} curve needs at least 2 points, got {}",
                name,
                curve.points.len()
            ),
            format!("{}.points", name),
        ));
        return false;
    }

    if let Some(index) = curve.points.iter().position(|p| !p.is_finite()) {
        result.add_error(ValidationError::with_path(
            ErrorCode::NonFiniteCoordinate,
            format!("{} curve has a non-finite coordinate", name),
            format!("{}.points[{}]", name, index),
        ));
        return false;
    }

    true
}

/// Warns when the curve cannot cover `[start.x, start.x + 1)`, where the
/// sampler will probe it.
fn check_unit_span(
    curve: &Polyline,
    name: &str,
    code: WarningCode,
    result: &mut ValidationResult,
) {
    let (Some(start), Some((min_x, max_x))) = (curve.start_point(), curve.x_range()) else {
        return;
    };

    if min_x > start.x + SPAN_WARNING_SLACK || max_x < start.x + 1.0 - SPAN_WARNING_SLACK {
        result.add_warning(ValidationWarning::with_path(
            code,
            format!(
                "{} curve spans x in [{}, {}] but is probed over [{}, {})",
                name,
                min_x,
                max_x,
                start.x,
                start.x + 1.0
            ),
            format!("{}.points", name),
        ));
    }
}
