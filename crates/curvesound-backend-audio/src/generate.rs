//! Main entry point for curve-to-sound generation.
//!
//! This module takes a request and renders it to WAV bytes deterministically.

use curvesound_spec::{validate_request, SynthesisRequest, ValidationWarning, SAMPLE_RATE};

use crate::error::{AudioError, AudioResult};
use crate::playback::PlaybackSink;
use crate::sampler::Sampler;
use crate::wav::WavResult;

/// Result of audio generation.
#[derive(Debug)]
pub struct GenerateResult {
    /// WAV file data.
    pub wav: WavResult,
    /// Samples rendered as silence because a probe missed.
    pub probe_misses: usize,
    /// Samples in one waveform cycle.
    pub samples_per_cycle: usize,
    /// Validation warnings for the request.
    pub warnings: Vec<ValidationWarning>,
}

/// Generates audio from a request.
///
/// The request is validated first; nothing is sampled if validation fails.
/// No partial buffer is returned on error.
///
/// # Arguments
/// * `request` - Curves and tone parameters
///
/// # Returns
/// Generated WAV file and metadata
pub fn generate(request: &SynthesisRequest) -> AudioResult<GenerateResult> {
    let warnings = validate_request(request)
        .into_result()
        .map_err(AudioError::InvalidRequest)?;

    let sampler = Sampler::from_request(request)?;
    let output = sampler.render(&request.waveform, &request.envelope)?;
    let wav = WavResult::from_samples(&output.samples, SAMPLE_RATE)?;

    Ok(GenerateResult {
        wav,
        probe_misses: output.probe_misses,
        samples_per_cycle: sampler.samples_per_cycle(),
        warnings,
    })
}

/// Generates audio and, if the request asks for it, hands the WAV to `sink`.
///
/// Playback is started and not waited on.
pub fn generate_and_play<S: PlaybackSink + ?Sized>(
    request: &SynthesisRequest,
    sink: &S,
) -> AudioResult<GenerateResult> {
    let result = generate(request)?;
    if request.play {
        sink.play(&result.wav.wav_data)?;
    }
    Ok(result)
}
