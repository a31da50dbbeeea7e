//! Parsing the canonical 44-byte WAV header.

use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use super::format::{WavFormat, WAV_HEADER_SIZE};

/// Fields of a canonical PCM WAV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// RIFF chunk size (file length minus 8).
    pub chunk_size: u32,
    /// Size of the fmt chunk body.
    pub fmt_size: u32,
    /// Audio format tag (1 = PCM).
    pub audio_format: u16,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    /// Bytes per sample frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Size of the data chunk in bytes.
    pub data_size: u32,
}

impl WavHeader {
    /// Parses the header at the start of `wav_data`.
    ///
    /// Returns `None` if the buffer is shorter than 44 bytes or the `RIFF`,
    /// `WAVE`, `fmt ` or `data` tags are not where the canonical layout puts
    /// them.
    pub fn parse(wav_data: &[u8]) -> Option<Self> {
        if wav_data.len() < WAV_HEADER_SIZE {
            return None;
        }
        Self::read(&mut Cursor::new(&wav_data[..WAV_HEADER_SIZE])).ok()?
    }

    fn read<R: Read>(r: &mut R) -> std::io::Result<Option<Self>> {
        let mut tag = [0u8; 4];

        r.read_exact(&mut tag)?;
        if &tag != b"RIFF" {
            return Ok(None);
        }
        let chunk_size = r.read_u32::<LittleEndian>()?;
        r.read_exact(&mut tag)?;
        if &tag != b"WAVE" {
            return Ok(None);
        }

        r.read_exact(&mut tag)?;
        if &tag != b"fmt " {
            return Ok(None);
        }
        let fmt_size = r.read_u32::<LittleEndian>()?;
        let audio_format = r.read_u16::<LittleEndian>()?;
        let channels = r.read_u16::<LittleEndian>()?;
        let sample_rate = r.read_u32::<LittleEndian>()?;
        let byte_rate = r.read_u32::<LittleEndian>()?;
        let block_align = r.read_u16::<LittleEndian>()?;
        let bits_per_sample = r.read_u16::<LittleEndian>()?;

        r.read_exact(&mut tag)?;
        if &tag != b"data" {
            return Ok(None);
        }
        let data_size = r.read_u32::<LittleEndian>()?;

        Ok(Some(Self {
            chunk_size,
            fmt_size,
            audio_format,
            channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
            data_size,
        }))
    }

    /// The format described by this header.
    pub fn format(&self) -> WavFormat {
        WavFormat {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample,
        }
    }

    /// Number of sample frames in the data chunk.
    pub fn num_samples(&self) -> usize {
        match self.block_align {
            0 => 0,
            align => self.data_size as usize / align as usize,
        }
    }

    /// Duration of the data chunk in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_samples() as f64 / self.sample_rate as f64
    }

    /// Returns true if the size and rate fields agree with each other and with
    /// a file of `file_len` bytes.
    pub fn is_consistent(&self, file_len: usize) -> bool {
        let format = self.format();
        self.audio_format == 1
            && self.fmt_size == 16
            && self.chunk_size as usize + 8 == file_len
            && self.data_size as usize + WAV_HEADER_SIZE == file_len
            && self.byte_rate == format.byte_rate()
            && self.block_align == format.block_align()
    }
}
