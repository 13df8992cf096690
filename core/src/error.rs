use thiserror::Error;

/// Result type for bidscat operations
pub type Result<T> = std::result::Result<T, BidscatError>;

/// Error types for bidscat operations
#[derive(Error, Debug)]
pub enum BidscatError {
    /// Template string was empty or absent
    #[error("template must be a valid format string")]
    InvalidTemplate,

    /// A protocol name did not parse into the expected fields
    #[error("series {series_id}: malformed protocol name {protocol_name:?}: {detail}")]
    MalformedProtocolName {
        series_id: String,
        protocol_name: String,
        detail: String,
    },

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decode/encode error
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BidscatError {
    /// Series id attached to the error, when there is one
    pub fn series_id(&self) -> Option<&str> {
        match self {
            BidscatError::MalformedProtocolName { series_id, .. } => Some(series_id),
            _ => None,
        }
    }
}
