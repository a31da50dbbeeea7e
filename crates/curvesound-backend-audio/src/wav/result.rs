//! WAV file generation result type.

use crate::error::AudioResult;

use super::format::{WavFormat, WAV_HEADER_SIZE};
use super::writer::{samples_to_pcm16, write_wav_to_vec};

/// Result of WAV file generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono samples.
    ///
    /// # Panics
    /// If the encoded length differs from `44 + 2 * samples.len()`. The size
    /// fields are derived from the payload, so this cannot happen unless the
    /// writer itself is broken.
    pub fn from_samples(samples: &[i16], sample_rate: u32) -> AudioResult<Self> {
        let pcm = samples_to_pcm16(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::mono(sample_rate);
        let wav_data = write_wav_to_vec(&format, &pcm)?;

        assert_eq!(
            wav_data.len(),
            WAV_HEADER_SIZE + samples.len() * 2,
            "encoded WAV length does not match its sample count"
        );

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Size of the data chunk in bytes.
    pub fn data_size(&self) -> usize {
        self.wav_data.len() - WAV_HEADER_SIZE
    }
}
