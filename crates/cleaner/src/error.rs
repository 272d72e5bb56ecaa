// ABOUTME: Error types for the sift cleaning pipeline.
// ABOUTME: Extraction itself never fails; only output serialization can.

use thiserror::Error;

/// Errors that can occur while producing cleaned output.
///
/// Malformed HTML, bad selectors and empty documents are not errors: the
/// extractor degrades gracefully and an empty outcome is reported through
/// [`CleanResult::is_empty`](crate::CleanResult::is_empty).
#[derive(Debug, Error)]
pub enum CleanError {
    /// The JSON chunk envelope could not be serialized.
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CleanError {
    /// Returns true if this is a serialization error.
    pub fn is_serialize(&self) -> bool {
        matches!(self, CleanError::Serialize(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_errors_convert() {
        let err: CleanError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert!(err.is_serialize());
        assert!(err.to_string().starts_with("failed to serialize output"));
    }
}
