//! WAV file writer builder.

use std::io;

use super::format::WavFormat;
use super::writer::{samples_to_pcm16, write_wav_to_vec};

/// WAV file writer builder.
#[derive(Debug, Clone, Copy)]
pub struct WavWriter {
    format: WavFormat,
}

impl WavWriter {
    /// Creates a new WAV writer with mono format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            format: WavFormat::mono(sample_rate),
        }
    }

    /// The format this writer emits.
    pub fn format(&self) -> &WavFormat {
        &self.format
    }

    /// Writes samples to a byte vector.
    pub fn write(&self, samples: &[i16]) -> io::Result<Vec<u8>> {
        write_wav_to_vec(&self.format, &samples_to_pcm16(samples))
    }

    /// Returns the BLAKE3 hash of the PCM data (not the full WAV file).
    pub fn pcm_hash(&self, samples: &[i16]) -> String {
        blake3::hash(&samples_to_pcm16(samples)).to_hex().to_string()
    }
}
