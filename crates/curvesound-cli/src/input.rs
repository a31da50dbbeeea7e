//! Loading synthesis requests from JSON files.

use curvesound_spec::SynthesisRequest;
use std::path::{Path, PathBuf};

/// Result of loading a request file.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed request.
    pub request: SynthesisRequest,
    /// BLAKE3 hash of the source file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur during request loading.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing failed.
    JsonParse { message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::JsonParse { message } => {
                write!(f, "JSON parse error: {}", message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load a request from a JSON file.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use curvesound_cli::input::load_request;
///
/// let loaded = load_request(Path::new("request.json")).unwrap();
/// println!("{} Hz", loaded.request.frequency_hz);
/// ```
pub fn load_request(path: &Path) -> Result<LoadResult, InputError> {
    let content = std::fs::read(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let source_hash = blake3::hash(&content).to_hex().to_string();

    let request: SynthesisRequest =
        serde_json::from_slice(&content).map_err(|e| InputError::JsonParse {
            message: e.to_string(),
        })?;

    Ok(LoadResult {
        request,
        source_hash,
    })
}
