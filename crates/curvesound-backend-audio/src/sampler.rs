//! Curve-probed sample generation.
//!
//! For each sample index `i` the sampler reads two heights:
//!
//! - `val_wav`: the waveform curve at `(i mod samples_per_cycle) / samples_per_cycle`,
//!   so one unit of the waveform's X repeats once per cycle;
//! - `val_env`: the envelope curve at `i / sample_count`, so one unit of the
//!   envelope's X spans the whole output.
//!
//! The sample is `amplitude * 32767 * val_wav * val_env`, rounded and then
//! clamped to the i16 range.

use curvesound_spec::{
    samples_per_cycle, ProbeMissPolicy, SynthesisRequest, BITS_PER_SAMPLE, MAX_DURATION_SECONDS,
    SAMPLE_RATE,
};

use crate::error::{AudioError, AudioResult};
use crate::geometry::{Curve, IntersectionTolerance};
use crate::probe::{CurveProbe, CurveRole};

/// Largest positive sample magnitude, `2^(bits - 1) - 1`.
pub const FULL_SCALE: f64 = ((1u32 << (BITS_PER_SAMPLE - 1)) - 1) as f64;

/// Samples produced by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleOutput {
    /// Signed 16-bit samples in time order.
    pub samples: Vec<i16>,
    /// Samples rendered as silence because a probe missed.
    pub probe_misses: usize,
}

/// Converts continuous curve heights into a buffer of i16 samples.
#[derive(Debug, Clone)]
pub struct Sampler {
    sample_count: usize,
    samples_per_cycle: usize,
    amplitude_max: f64,
    tolerance: IntersectionTolerance,
    miss_policy: ProbeMissPolicy,
}

impl Sampler {
    /// Creates a sampler, rejecting parameters that cannot be rendered.
    ///
    /// # Errors
    /// * `InvalidFrequency` if the frequency is not finite, not positive, or
    ///   leaves less than one sample per cycle
    /// * `InvalidAmplitude` if the amplitude is not finite
    /// * `InvalidDuration` if the duration is 0 or too long
    pub fn new(frequency_hz: f64, amplitude: f64, duration_seconds: u32) -> AudioResult<Self> {
        let samples_per_cycle =
            samples_per_cycle(frequency_hz).ok_or(AudioError::InvalidFrequency { freq: frequency_hz })?;

        if !amplitude.is_finite() {
            return Err(AudioError::InvalidAmplitude { amplitude });
        }

        if duration_seconds == 0 || duration_seconds > MAX_DURATION_SECONDS {
            return Err(AudioError::InvalidDuration {
                duration: duration_seconds,
            });
        }

        Ok(Self {
            sample_count: SAMPLE_RATE as usize * duration_seconds as usize,
            samples_per_cycle,
            amplitude_max: amplitude * FULL_SCALE,
            tolerance: IntersectionTolerance::default(),
            miss_policy: ProbeMissPolicy::default(),
        })
    }

    /// Creates a sampler from a request's tone parameters and miss policy.
    pub fn from_request(request: &SynthesisRequest) -> AudioResult<Self> {
        Ok(Self::new(
            request.frequency_hz,
            request.amplitude,
            request.duration_seconds,
        )?
        .with_miss_policy(request.on_probe_miss))
    }

    /// Sets the probe-miss policy.
    pub fn with_miss_policy(mut self, policy: ProbeMissPolicy) -> Self {
        self.miss_policy = policy;
        self
    }

    /// Overrides the intersection tolerance.
    pub fn with_tolerance(mut self, tolerance: IntersectionTolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Number of samples a render produces.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Number of samples per waveform cycle.
    pub fn samples_per_cycle(&self) -> usize {
        self.samples_per_cycle
    }

    /// Peak magnitude before waveform and envelope scaling.
    pub fn amplitude_max(&self) -> f64 {
        self.amplitude_max
    }

    /// Renders the full buffer.
    ///
    /// # Errors
    /// * `InvalidParameter` if either curve is empty
    /// * `ProbeMiss` on the first missed probe, under [`ProbeMissPolicy::Error`]
    pub fn render<W, E>(&self, waveform: &W, envelope: &E) -> AudioResult<SampleOutput>
    where
        W: Curve + ?Sized,
        E: Curve + ?Sized,
    {
        let wav_probe = CurveProbe::waveform(waveform)
            .ok_or_else(|| AudioError::invalid_param("waveform", "curve has no points"))?
            .with_tolerance(self.tolerance);
        let env_probe = CurveProbe::envelope(envelope)
            .ok_or_else(|| AudioError::invalid_param("envelope", "curve has no points"))?
            .with_tolerance(self.tolerance);

        let cycle = self.samples_per_cycle as f64;
        let total = self.sample_count as f64;

        let mut samples = Vec::with_capacity(self.sample_count);
        let mut probe_misses = 0;

        for i in 0..self.sample_count {
            let wav_dx = (i % self.samples_per_cycle) as f64 / cycle;
            let env_dx = i as f64 / total;

            let val_wav = self.read(&wav_probe, CurveRole::Waveform, i, wav_dx)?;
            let val_env = self.read(&env_probe, CurveRole::Envelope, i, env_dx)?;

            match (val_wav, val_env) {
                (Some(w), Some(e)) => samples.push(quantize_sample(self.amplitude_max, w, e)),
                _ => {
                    probe_misses += 1;
                    samples.push(0);
                }
            }
        }

        Ok(SampleOutput {
            samples,
            probe_misses,
        })
    }

    /// Reads one probe, applying the miss policy.
    fn read<C: Curve + ?Sized>(
        &self,
        probe: &CurveProbe<'_, C>,
        role: CurveRole,
        index: usize,
        dx: f64,
    ) -> AudioResult<Option<f64>> {
        match (probe.sample(dx), self.miss_policy) {
            (Some(value), _) => Ok(Some(value)),
            (None, ProbeMissPolicy::Silence) => Ok(None),
            (None, ProbeMissPolicy::Error) => Err(AudioError::ProbeMiss {
                curve: role,
                index,
                x: probe.x_at(dx),
            }),
        }
    }
}

/// Combines the peak magnitude with the two curve heights into one sample.
///
/// The product is rounded to the nearest integer and clamped to
/// `[-32768, 32767]`, so out-of-range values saturate instead of wrapping.
pub fn quantize_sample(amplitude_max: f64, val_wav: f64, val_env: f64) -> i16 {
    let value = (amplitude_max * val_wav * val_env).round();
    value.clamp(i16::MIN as f64, i16::MAX as f64) as i16
}
