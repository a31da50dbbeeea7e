//! Synthesis request type and fixed output format constants.

use serde::{Deserialize, Serialize};

use crate::curve::{Point2, Polyline};

/// Current request version.
pub const REQUEST_VERSION: u32 = 1;

/// Output sample rate in Hz. Fixed for every request.
pub const SAMPLE_RATE: u32 = 44_100;

/// Bits per PCM sample.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Number of output channels.
pub const CHANNELS: u16 = 1;

/// Longest accepted duration. Keeps the WAV data chunk size inside a u32.
pub const MAX_DURATION_SECONDS: u32 = 3600;

/// Default duration when a request omits it.
pub const DEFAULT_DURATION_SECONDS: u32 = 1;

/// Number of samples in one waveform cycle at `frequency_hz`.
///
/// Returns `None` for non-finite or non-positive frequencies and for
/// frequencies above the sample rate, where a cycle would be shorter than
/// one sample.
pub fn samples_per_cycle(frequency_hz: f64) -> Option<usize> {
    if !frequency_hz.is_finite() || frequency_hz <= 0.0 {
        return None;
    }
    let cycle = (f64::from(SAMPLE_RATE) / frequency_hz).floor();
    if cycle >= 1.0 {
        Some(cycle as usize)
    } else {
        None
    }
}

/// What the sampler does when a probe line misses its curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeMissPolicy {
    /// Abort the whole run with an error naming the curve and sample index.
    #[default]
    Error,
    /// Use a magnitude of 0 for the missed sample and keep going.
    Silence,
}

impl ProbeMissPolicy {
    /// Returns the policy as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeMissPolicy::Error => "error",
            ProbeMissPolicy::Silence => "silence",
        }
    }
}

fn default_version() -> u32 {
    REQUEST_VERSION
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_SECONDS
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A single synthesis run: three curves plus tone parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Request format version (must be 1).
    #[serde(default = "default_version")]
    pub request_version: u32,

    /// One cycle of the wave shape, spanning one unit of X from its start.
    pub waveform: Polyline,

    /// Amplitude over the whole duration, spanning one unit of X from its start.
    pub envelope: Polyline,

    /// Pitch curve. Reserved: accepted and validated but never sampled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<Polyline>,

    /// Tone frequency in Hz.
    pub frequency_hz: f64,

    /// Peak amplitude as a fraction of full scale. Not clamped.
    pub amplitude: f64,

    /// Length of the output in whole seconds.
    #[serde(default = "default_duration")]
    pub duration_seconds: u32,

    /// Behavior when a probe misses a curve.
    #[serde(default)]
    pub on_probe_miss: ProbeMissPolicy,

    /// Hand the rendered buffer to the playback sink.
    #[serde(default, skip_serializing_if = "is_false")]
    pub play: bool,
}

impl SynthesisRequest {
    /// Creates a new request builder.
    pub fn builder(waveform: Polyline, envelope: Polyline) -> SynthesisRequestBuilder {
        SynthesisRequestBuilder::new(waveform, envelope)
    }

    /// The reference request: a circle waveform starting at the origin, a
    /// linear fade-in envelope, 440 Hz at full scale for one second.
    pub fn reference() -> Self {
        let waveform = Polyline::circle(Point2::new(0.5, 0.0), 0.5, 256, std::f64::consts::PI);
        let envelope = Polyline::line(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        Self::builder(waveform, envelope)
            .frequency_hz(440.0)
            .amplitude(1.0)
            .build()
    }

    /// Parses a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the request to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the request to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the request to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Number of samples the request renders to.
    pub fn sample_count(&self) -> usize {
        SAMPLE_RATE as usize * self.duration_seconds as usize
    }
}

/// Builder for constructing [`SynthesisRequest`] instances.
#[derive(Debug, Clone)]
pub struct SynthesisRequestBuilder {
    waveform: Polyline,
    envelope: Polyline,
    pitch: Option<Polyline>,
    frequency_hz: f64,
    amplitude: f64,
    duration_seconds: u32,
    on_probe_miss: ProbeMissPolicy,
    play: bool,
}

impl SynthesisRequestBuilder {
    /// Creates a new builder with 440 Hz, full amplitude and one second.
    pub fn new(waveform: Polyline, envelope: Polyline) -> Self {
        Self {
            waveform,
            envelope,
            pitch: None,
            frequency_hz: 440.0,
            amplitude: 1.0,
            duration_seconds: DEFAULT_DURATION_SECONDS,
            on_probe_miss: ProbeMissPolicy::default(),
            play: false,
        }
    }

    /// Sets the reserved pitch curve.
    pub fn pitch(mut self, pitch: Polyline) -> Self {
        self.pitch = Some(pitch);
        self
    }

    /// Sets the tone frequency.
    pub fn frequency_hz(mut self, frequency_hz: f64) -> Self {
        self.frequency_hz = frequency_hz;
        self
    }

    /// Sets the amplitude.
    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Sets the duration in seconds.
    pub fn duration_seconds(mut self, duration_seconds: u32) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }

    /// Sets the probe-miss policy.
    pub fn on_probe_miss(mut self, policy: ProbeMissPolicy) -> Self {
        self.on_probe_miss = policy;
        self
    }

    /// Sets the play flag.
    pub fn play(mut self, play: bool) -> Self {
        self.play = play;
        self
    }

    /// Builds the request.
    pub fn build(self) -> SynthesisRequest {
        SynthesisRequest {
            request_version: REQUEST_VERSION,
            waveform: self.waveform,
            envelope: self.envelope,
            pitch: self.pitch,
            frequency_hz: self.frequency_hz,
            amplitude: self.amplitude,
            duration_seconds: self.duration_seconds,
            on_probe_miss: self.on_probe_miss,
            play: self.play,
        }
    }
}
