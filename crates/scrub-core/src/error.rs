//! Error types for record scrubbing.

use thiserror::Error;

/// Result alias using [`ScrubError`].
pub type ScrubResult<T> = Result<T, ScrubError>;

/// Errors surfaced while preparing a record for the engine.
///
/// The engine itself is total: classification and masking never fail for any
/// input record. The fallible surface is payload decoding, which the caller
/// owns and may degrade from (an undecodable payload is treated as an empty
/// record and classified as non-PII).
#[derive(Debug, Error)]
pub enum ScrubError {
    /// Payload was not valid JSON.
    #[error("payload decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Payload decoded to something other than a JSON object.
    #[error("payload is not a JSON object")]
    NotAnObject,
}
