use thiserror::Error;

/// Failure talking to the recruitment REST API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The API answered with a non-2xx status.
    #[error("upstream answered {status}: {body}")]
    Status { status: u16, body: String },
    /// The API could not be reached or the exchange was cut short.
    #[error("upstream transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// A 2xx body did not have the expected shape.
    #[error("upstream body did not decode: {0}")]
    Decode(#[from] serde_json::Error),
    /// The base URL is unusable.
    #[error("{0}")]
    Url(String),
    /// The outgoing request could not be assembled from the caller's data.
    #[error("{0}")]
    Payload(String),
}

impl UpstreamError {
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
