//! Error type for the JSON helpers.

use thiserror::Error;

/// Failure to move a value to or from JSON.
#[derive(Debug, Error)]
pub enum ObjectError {
    /// The value could not be serialized.
    #[error("failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// The text was not valid JSON for the requested type.
    #[error("failed to decode JSON: {0}")]
    Decode(#[source] serde_json::Error),
}
