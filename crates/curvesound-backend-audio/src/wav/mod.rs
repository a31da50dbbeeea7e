//! Deterministic WAV encoder.
//!
//! Writes canonical 44-byte-header PCM WAV files with no optional chunks,
//! timestamps or other variable metadata, so identical samples always encode
//! to identical bytes. Every size field is computed from the payload length.

mod builder;
mod format;
mod header;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use builder::WavWriter;
pub use format::{WavFormat, WAV_HEADER_SIZE};
pub use header::WavHeader;
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec};
