//! Engine error taxonomy.
//!
//! Only `Draw` is fatal: it propagates out of the frame tick to the host.
//! Asset failures and missing capabilities are logged and recovered locally.

use thiserror::Error;

/// Result alias for fallible engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A texture could not be fetched or decoded by the host.
    #[error("failed to load texture for '{name}': {reason}")]
    AssetLoad { name: String, reason: String },

    /// An optional host feature (e.g. orbit controls) is not available.
    #[error("missing render capability: {0}")]
    MissingCapability(&'static str),

    /// The render backend failed to draw a frame.
    #[error("draw failed on backend '{backend}': {reason}")]
    Draw { backend: &'static str, reason: String },

    /// The asset manifest is not valid JSON.
    #[error("invalid asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_load_message_names_the_body() {
        let err = EngineError::AssetLoad {
            name: "Mars".into(),
            reason: "404".into(),
        };
        assert_eq!(err.to_string(), "failed to load texture for 'Mars': 404");
    }

    #[test]
    fn manifest_error_converts_from_serde() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: EngineError = parse.unwrap_err().into();
        assert!(matches!(err, EngineError::Manifest(_)));
    }
}
