//! Core WAV writing and PCM conversion functions.

use std::io::{self, Write};

use super::format::{WavFormat, WAV_HEADER_SIZE};

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Errors
/// Returns `InvalidInput` if the payload is too large for the 32-bit size
/// fields, otherwise any error from `writer`.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = u32::try_from(pcm_data.len())
        .ok()
        .filter(|size| size.checked_add(36).is_some())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("PCM payload of {} bytes does not fit a WAV file", pcm_data.len()),
            )
        })?;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
///
/// # Errors
/// Returns `InvalidInput` if the payload is too large for a WAV file.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(WAV_HEADER_SIZE + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Converts i16 samples to little-endian PCM bytes.
pub fn samples_to_pcm16(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}
