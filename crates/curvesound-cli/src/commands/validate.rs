//! Validate command implementation
//!
//! Checks a request file without rendering it.

use anyhow::{Context, Result};
use colored::Colorize;
use curvesound_spec::{canonical_request_hash, validate_request, ValidationResult};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{
    input_error_to_json, print_json, validation_error_to_json, validation_warning_to_json,
    ValidateOutput,
};
use crate::input::{load_request, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `request_path` - Path to the request JSON file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(request_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(request_path)
    } else {
        run_human(request_path)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(request_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), request_path);

    let LoadResult {
        request,
        source_hash,
    } = load_request(Path::new(request_path))
        .with_context(|| format!("Failed to load request file: {}", request_path))?;

    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);

    let result = validate_request(&request);
    print_validation_results(&result);

    if result.is_ok() {
        println!("\n{} Request is valid", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Request has {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(request_path: &str) -> Result<ExitCode> {
    let LoadResult {
        request,
        source_hash,
    } = match load_request(Path::new(request_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let output =
                ValidateOutput::new(vec![input_error_to_json(&e, request_path)], vec![], None, None);
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let result = validate_request(&request);
    let request_hash = canonical_request_hash(&request).ok();

    let output = ValidateOutput::new(
        result.errors.iter().map(validation_error_to_json).collect(),
        result.warnings.iter().map(validation_warning_to_json).collect(),
        request_hash,
        Some(source_hash),
    );
    print_json(&output)?;

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Prints errors and warnings as colored lines.
pub(crate) fn print_validation_results(result: &ValidationResult) {
    for error in &result.errors {
        println!("  {} {}", "x".red(), error);
    }
    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvesound_spec::SynthesisRequest;

    fn write_request(
        dir: &tempfile::TempDir,
        filename: &str,
        request: &SynthesisRequest,
    ) -> std::path::PathBuf {
        let path = dir.path().join(filename);
        std::fs::write(&path, request.to_json_pretty().unwrap()).unwrap();
        path
    }

    #[test]
    fn validate_accepts_reference_request() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_request(&tmp, "request.json", &SynthesisRequest::reference());

        let code = run(path.to_str().unwrap(), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn validate_rejects_zero_frequency() {
        let tmp = tempfile::tempdir().unwrap();
        let mut request = SynthesisRequest::reference();
        request.frequency_hz = 0.0;
        let path = write_request(&tmp, "request.json", &request);

        let code = run(path.to_str().unwrap(), false).unwrap();
        assert_eq!(code, ExitCode::from(1));

        let code = run(path.to_str().unwrap(), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn validate_missing_file_is_an_error_for_humans() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing.json");
        assert!(run(path.to_str().unwrap(), false).is_err());
    }

    #[test]
    fn validate_missing_file_is_reported_in_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing.json");
        let code = run(path.to_str().unwrap(), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }
}
