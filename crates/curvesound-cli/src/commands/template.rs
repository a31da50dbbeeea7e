//! Template command implementation
//!
//! Writes the reference request: a circle waveform, a linear ramp envelope,
//! 440 Hz at full amplitude for one second.

use anyhow::{Context, Result};
use colored::Colorize;
use curvesound_spec::SynthesisRequest;
use std::path::Path;
use std::process::ExitCode;

/// Run the template command
///
/// Prints the request JSON to stdout, or writes it to `output_path`.
pub fn run(output_path: Option<&str>) -> Result<ExitCode> {
    let json = template_json()?;

    match output_path {
        Some(path) => {
            write_template(Path::new(path), &json)?;
            println!("{} {}", "Wrote:".dimmed(), path);
            println!("\n{} Template written", "SUCCESS".green().bold());
        }
        None => println!("{}", json),
    }

    Ok(ExitCode::SUCCESS)
}

/// The reference request as pretty JSON.
pub fn template_json() -> Result<String> {
    SynthesisRequest::reference()
        .to_json_pretty()
        .context("Failed to serialize template request")
}

fn write_template(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, format!("{}\n", json))
        .with_context(|| format!("Failed to write template: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvesound_spec::validate_request;

    #[test]
    fn template_is_a_valid_request() {
        let json = template_json().unwrap();
        let request = SynthesisRequest::from_json(&json).unwrap();

        let result = validate_request(&request);
        assert!(result.is_ok());
        assert!(result.warnings.is_empty());
        assert_eq!(request.frequency_hz, 440.0);
        assert_eq!(request.duration_seconds, 1);
    }

    #[test]
    fn template_writes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("request.json");

        let code = run(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(SynthesisRequest::from_json(&content).is_ok());
    }
}
