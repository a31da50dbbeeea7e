//! curvesound request library
//!
//! This crate provides the types, validation, and hashing for curvesound
//! synthesis requests. A request is a JSON document naming three curves
//! (waveform, envelope, reserved pitch) and the tone parameters used to turn
//! them into a mono 16-bit WAV file.
//!
//! # Example
//!
//! ```
//! use curvesound_spec::{validate_request, Point2, Polyline, SynthesisRequest};
//!
//! let waveform = Polyline::circle(Point2::new(0.5, 0.0), 0.5, 128, std::f64::consts::PI);
//! let envelope = Polyline::line(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
//!
//! let request = SynthesisRequest::builder(waveform, envelope)
//!     .frequency_hz(440.0)
//!     .amplitude(0.8)
//!     .duration_seconds(2)
//!     .build();
//!
//! assert!(validate_request(&request).is_ok());
//! assert_eq!(request.sample_count(), 88_200);
//! ```
//!
//! # Modules
//!
//! - [`curve`]: Point and polyline data
//! - [`error`]: Error and warning types for validation
//! - [`hash`]: Canonical request hashing
//! - [`request`]: Request type, builder, and fixed format constants
//! - [`validation`]: Request validation

pub mod curve;
pub mod error;
pub mod hash;
pub mod request;
pub mod validation;

// Re-export commonly used types at the crate root
pub use curve::{Point2, Polyline};
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use hash::{canonical_request_hash, canonical_value_hash};
pub use request::{
    samples_per_cycle, ProbeMissPolicy, SynthesisRequest, SynthesisRequestBuilder,
    BITS_PER_SAMPLE, CHANNELS, DEFAULT_DURATION_SECONDS, MAX_DURATION_SECONDS, REQUEST_VERSION,
    SAMPLE_RATE,
};
pub use validation::validate_request;
