//! curvesound audio backend
//!
//! Renders a [`SynthesisRequest`](curvesound_spec::SynthesisRequest) into a
//! mono 16-bit 44.1 kHz WAV buffer.
//!
//! # Overview
//!
//! Generation runs in two stages:
//!
//! - **Sampler** - for every sample index, probes the waveform curve (one
//!   cycle, repeated at the requested frequency) and the envelope curve
//!   (stretched over the whole duration) with short vertical segments, and
//!   combines the two heights with the amplitude into one i16 sample.
//! - **Encoder** - writes a canonical 44-byte RIFF/WAVE header followed by
//!   the little-endian samples.
//!
//! # Determinism
//!
//! Generation is a pure function of the request. The same request always
//! produces byte-identical WAV data, and the BLAKE3 hash of the PCM payload
//! is reported alongside it.
//!
//! # Example
//!
//! ```
//! use curvesound_backend_audio::generate;
//! use curvesound_spec::SynthesisRequest;
//!
//! let result = generate(&SynthesisRequest::reference()).unwrap();
//! assert_eq!(result.wav.num_samples, 44_100);
//! assert_eq!(result.wav.wav_data.len(), 44 + 2 * 44_100);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point
//! - [`geometry`] - `Curve` trait and polyline intersection
//! - [`probe`] - Reading a curve's height at an X offset
//! - [`sampler`] - Sample generation, rounding and clamping
//! - [`wav`] - Deterministic WAV encoder and header parser
//! - [`playback`] - Fire-and-forget playback sinks

pub mod error;
pub mod generate;
pub mod geometry;
pub mod playback;
pub mod probe;
pub mod sampler;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use generate::{generate, generate_and_play, GenerateResult};
pub use geometry::{Curve, CurveIntersection, IntersectionKind, IntersectionTolerance, LineSegment};
pub use playback::{NullSink, PlaybackSink, RecordingSink};
pub use probe::{CurveProbe, CurveRole};
pub use sampler::{quantize_sample, SampleOutput, Sampler};
pub use wav::{WavHeader, WavResult, WavWriter};
