//! Canonical request hashing.
//!
//! The canonical form is the compact JSON of the request with object keys
//! sorted. `serde_json::Value` stores objects in a sorted map, so serializing
//! through a `Value` yields that form directly.

use crate::error::SpecError;
use crate::request::SynthesisRequest;

/// Computes the canonical BLAKE3 hash of a request.
///
/// ```text
/// request_hash = hex(BLAKE3(canonical_json(request)))
/// ```
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
///
/// # Example
/// ```
/// use curvesound_spec::{canonical_request_hash, SynthesisRequest};
///
/// let hash = canonical_request_hash(&SynthesisRequest::reference()).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_request_hash(request: &SynthesisRequest) -> Result<String, SpecError> {
    let value = request.to_value()?;
    canonical_value_hash(&value)
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> Result<String, SpecError> {
    let canonical = serde_json::to_string(value)?;
    Ok(blake3::hash(canonical.as_bytes()).to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hash_ignores_key_order() {
        let a = json!({ "b": 1, "a": [1.5, 2.5] });
        let b = json!({ "a": [1.5, 2.5], "b": 1 });
        assert_eq!(
            canonical_value_hash(&a).unwrap(),
            canonical_value_hash(&b).unwrap()
        );
    }

    #[test]
    fn test_hash_tracks_parameters() {
        let request = SynthesisRequest::reference();
        let mut louder = request.clone();
        louder.amplitude = 0.5;

        let h1 = canonical_request_hash(&request).unwrap();
        let h2 = canonical_request_hash(&request).unwrap();
        let h3 = canonical_request_hash(&louder).unwrap();

        assert_eq!(h1, h2);
        assert_ne!(h1, h3);
        assert!(h1.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
