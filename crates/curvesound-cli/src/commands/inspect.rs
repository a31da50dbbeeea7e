//! Inspect command implementation
//!
//! Reads a WAV file's header and reports its format and payload hash.

use anyhow::{Context, Result};
use colored::Colorize;
use curvesound_backend_audio::wav::compute_pcm_hash;
use curvesound_backend_audio::WavHeader;
use std::process::ExitCode;

use super::json_output::{
    error_codes, print_json, warning_codes, InspectOutput, InspectResult, JsonError, JsonWarning,
};

/// Run the inspect command
///
/// # Arguments
/// * `input_path` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if the file has a canonical header, 1 otherwise
pub fn run(input_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input_path)
    } else {
        run_human(input_path)
    }
}

/// Reads the header fields and derived values from WAV bytes.
///
/// Returns `None` if the bytes do not start with a canonical header. The
/// boolean is false when the size fields disagree with the file length.
pub fn inspect_bytes(wav: &[u8]) -> Option<(InspectResult, bool)> {
    let header = WavHeader::parse(wav)?;
    let result = InspectResult {
        audio_format: header.audio_format,
        channels: header.channels,
        sample_rate: header.sample_rate,
        bits_per_sample: header.bits_per_sample,
        byte_rate: header.byte_rate,
        block_align: header.block_align,
        data_size: header.data_size,
        num_samples: header.num_samples(),
        duration_seconds: header.duration_seconds(),
        pcm_hash: compute_pcm_hash(wav),
    };
    Some((result, header.is_consistent(wav.len())))
}

/// Run inspect with human-readable (colored) output
fn run_human(input_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Inspecting:".cyan().bold(), input_path);

    let wav = std::fs::read(input_path)
        .with_context(|| format!("Failed to read WAV file: {}", input_path))?;

    let Some((result, consistent)) = inspect_bytes(&wav) else {
        println!(
            "\n{} Not a canonical PCM WAV file ({} bytes)",
            "FAILED".red().bold(),
            wav.len()
        );
        return Ok(ExitCode::from(1));
    };

    println!("{} {}", "Format:".dimmed(), result.audio_format);
    println!("{} {}", "Channels:".dimmed(), result.channels);
    println!("{} {} Hz", "Sample rate:".dimmed(), result.sample_rate);
    println!("{} {}", "Bits per sample:".dimmed(), result.bits_per_sample);
    println!("{} {}", "Byte rate:".dimmed(), result.byte_rate);
    println!("{} {}", "Block align:".dimmed(), result.block_align);
    println!("{} {} bytes", "Data size:".dimmed(), result.data_size);
    println!("{} {}", "Samples:".dimmed(), result.num_samples);
    println!("{} {:.3} s", "Duration:".dimmed(), result.duration_seconds);
    if let Some(ref hash) = result.pcm_hash {
        println!("{} {}", "PCM hash:".dimmed(), hash);
    }

    if !consistent {
        println!(
            "  {} header size fields disagree with the file length ({} bytes)",
            "!".yellow(),
            wav.len()
        );
    }

    println!("\n{} Header parsed", "SUCCESS".green().bold());
    Ok(ExitCode::SUCCESS)
}

/// Run inspect with machine-readable JSON output
fn run_json(input_path: &str) -> Result<ExitCode> {
    let wav = match std::fs::read(input_path) {
        Ok(wav) => wav,
        Err(e) => {
            let error = JsonError::new(
                error_codes::FILE_READ,
                format!("failed to read file '{}': {}", input_path, e),
            )
            .with_file(input_path);
            print_json(&InspectOutput::failure(vec![error]))?;
            return Ok(ExitCode::from(1));
        }
    };

    match inspect_bytes(&wav) {
        Some((result, consistent)) => {
            let mut warnings = Vec::new();
            if !consistent {
                warnings.push(JsonWarning::new(
                    warning_codes::INCONSISTENT_HEADER,
                    format!(
                        "header size fields disagree with the file length ({} bytes)",
                        wav.len()
                    ),
                ));
            }
            print_json(&InspectOutput::success(result, warnings))?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let error = JsonError::new(
                error_codes::INVALID_WAV,
                "not a canonical PCM WAV file",
            )
            .with_file(input_path);
            print_json(&InspectOutput::failure(vec![error]))?;
            Ok(ExitCode::from(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvesound_backend_audio::WavResult;
    use pretty_assertions::assert_eq;

    #[test]
    fn inspect_bytes_reads_generated_wav() {
        let samples: Vec<i16> = (0..441).map(|i| i as i16).collect();
        let wav = WavResult::from_samples(&samples, 44_100).unwrap();

        let (result, consistent) = inspect_bytes(&wav.wav_data).unwrap();
        assert!(consistent);
        assert_eq!(result.audio_format, 1);
        assert_eq!(result.channels, 1);
        assert_eq!(result.sample_rate, 44_100);
        assert_eq!(result.bits_per_sample, 16);
        assert_eq!(result.byte_rate, 88_200);
        assert_eq!(result.block_align, 2);
        assert_eq!(result.data_size, 882);
        assert_eq!(result.num_samples, 441);
        assert!((result.duration_seconds - 0.01).abs() < 1e-12);
        assert_eq!(result.pcm_hash, Some(wav.pcm_hash));
    }

    #[test]
    fn inspect_bytes_flags_truncated_file() {
        let wav = WavResult::from_samples(&[1, 2, 3, 4], 44_100).unwrap();
        let (_, consistent) = inspect_bytes(&wav.wav_data[..46]).unwrap();
        assert!(!consistent);
    }

    #[test]
    fn inspect_rejects_non_wav() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("noise.wav");
        std::fs::write(&path, b"definitely not a RIFF file, just text padding").unwrap();

        assert!(inspect_bytes(b"short").is_none());
        assert_eq!(run(path.to_str().unwrap(), false).unwrap(), ExitCode::from(1));
        assert_eq!(run(path.to_str().unwrap(), true).unwrap(), ExitCode::from(1));
    }

    #[test]
    fn inspect_accepts_written_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("tone.wav");
        let wav = WavResult::from_samples(&[0; 100], 44_100).unwrap();
        std::fs::write(&path, &wav.wav_data).unwrap();

        assert_eq!(run(path.to_str().unwrap(), false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(path.to_str().unwrap(), true).unwrap(), ExitCode::SUCCESS);
    }
}
