//! Render command implementation
//!
//! Renders a request to a WAV file and optionally plays it.

use anyhow::{Context, Result};
use colored::Colorize;
use curvesound_backend_audio::{generate, AudioError, GenerateResult, PlaybackSink};
use curvesound_spec::{canonical_request_hash, SynthesisRequest, ValidationWarning};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{
    audio_error_to_json, error_codes, input_error_to_json, print_json, validation_warning_to_json,
    warning_codes, JsonError, JsonWarning, RenderOutput, RenderResult,
};
use crate::input::{load_request, LoadResult};
use crate::playback::SystemPlayer;

/// Run the render command
///
/// # Arguments
/// * `request_path` - Path to the request JSON file
/// * `output_path` - Output WAV path (default: request path with `.wav`)
/// * `play` - Play the result even if the request does not ask for it
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 on success, 1 on failure
pub fn run(
    request_path: &str,
    output_path: Option<&str>,
    play: bool,
    json_output: bool,
) -> Result<ExitCode> {
    run_with_sink(request_path, output_path, play, json_output, &SystemPlayer)
}

/// Run the render command with an explicit playback sink.
pub fn run_with_sink(
    request_path: &str,
    output_path: Option<&str>,
    play: bool,
    json_output: bool,
    sink: &dyn PlaybackSink,
) -> Result<ExitCode> {
    let output_path = resolve_output_path(request_path, output_path);
    if json_output {
        run_json(request_path, &output_path, play, sink)
    } else {
        run_human(request_path, &output_path, play, sink)
    }
}

/// Default output path: the request file with a `.wav` extension.
pub fn resolve_output_path(request_path: &str, output_path: Option<&str>) -> PathBuf {
    match output_path {
        Some(path) => PathBuf::from(path),
        None => Path::new(request_path).with_extension("wav"),
    }
}

/// Run render with human-readable (colored) output
fn run_human(
    request_path: &str,
    output_path: &Path,
    play: bool,
    sink: &dyn PlaybackSink,
) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Rendering:".cyan().bold(), request_path);

    let LoadResult { request, .. } = load_request(Path::new(request_path))
        .with_context(|| format!("Failed to load request file: {}", request_path))?;

    println!(
        "{} {} Hz, amplitude {}, {} s",
        "Tone:".dimmed(),
        request.frequency_hz,
        request.amplitude,
        request.duration_seconds
    );

    let result = match generate(&request) {
        Ok(result) => result,
        Err(AudioError::InvalidRequest(errors)) => {
            for error in &errors {
                println!("  {} {}", "x".red(), error);
            }
            println!(
                "\n{} Request has {} error(s)",
                "FAILED".red().bold(),
                errors.len()
            );
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e).context("Rendering failed"),
    };

    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
    if result.probe_misses > 0 {
        println!(
            "  {} {} sample(s) rendered as silence after probe misses",
            "!".yellow(),
            result.probe_misses
        );
    }

    write_output(output_path, &result)?;

    println!(
        "{} {} ({} samples, {} bytes)",
        "Wrote:".dimmed(),
        output_path.display(),
        result.wav.num_samples,
        result.wav.wav_data.len()
    );
    println!("{} {}", "PCM hash:".dimmed(), result.wav.pcm_hash);

    if play || request.play {
        match sink.play(&result.wav.wav_data) {
            Ok(()) => println!("{} started", "Playback:".dimmed()),
            Err(e) => println!("  {} {}", "!".yellow(), e),
        }
    }

    println!(
        "\n{} Rendered in {}ms",
        "SUCCESS".green().bold(),
        start.elapsed().as_millis()
    );
    Ok(ExitCode::SUCCESS)
}

/// Run render with machine-readable JSON output
fn run_json(
    request_path: &str,
    output_path: &Path,
    play: bool,
    sink: &dyn PlaybackSink,
) -> Result<ExitCode> {
    let LoadResult { request, .. } = match load_request(Path::new(request_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let output = RenderOutput::failure(vec![input_error_to_json(&e, request_path)], vec![]);
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let result = match generate(&request) {
        Ok(result) => result,
        Err(e) => {
            print_json(&RenderOutput::failure(audio_error_to_json(&e), vec![]))?;
            return Ok(ExitCode::from(1));
        }
    };

    let mut warnings = render_warnings(&result.warnings, result.probe_misses);

    if let Err(e) = write_output(output_path, &result) {
        let error = JsonError::new(error_codes::FILE_WRITE, format!("{:#}", e))
            .with_file(output_path.display().to_string());
        print_json(&RenderOutput::failure(vec![error], warnings))?;
        return Ok(ExitCode::from(1));
    }

    let played = if play || request.play {
        match sink.play(&result.wav.wav_data) {
            Ok(()) => true,
            Err(e) => {
                warnings.push(JsonWarning::new(
                    curvesound_spec::BackendError::code(&e),
                    e.to_string(),
                ));
                false
            }
        }
    } else {
        false
    };

    let render_result = RenderResult {
        output: output_path.display().to_string(),
        num_samples: result.wav.num_samples,
        samples_per_cycle: result.samples_per_cycle,
        probe_misses: result.probe_misses,
        file_size: result.wav.wav_data.len(),
        pcm_hash: result.wav.pcm_hash.clone(),
        request_hash: request_hash(&request),
        played,
    };
    print_json(&RenderOutput::success(render_result, warnings))?;
    Ok(ExitCode::SUCCESS)
}

fn render_warnings(warnings: &[ValidationWarning], probe_misses: usize) -> Vec<JsonWarning> {
    let mut out: Vec<JsonWarning> = warnings.iter().map(validation_warning_to_json).collect();
    if probe_misses > 0 {
        out.push(JsonWarning::new(
            warning_codes::PROBE_MISSES,
            format!(
                "{} sample(s) rendered as silence after probe misses",
                probe_misses
            ),
        ));
    }
    out
}

fn request_hash(request: &SynthesisRequest) -> String {
    canonical_request_hash(request).unwrap_or_else(|_| "unknown".to_string())
}

fn write_output(output_path: &Path, result: &GenerateResult) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(output_path, &result.wav.wav_data)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))
}
