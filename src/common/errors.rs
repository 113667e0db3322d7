use thiserror::Error;

/// Failures talking to the upstream REST API from server functions.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Upstream request failed: {0}")]
    Transport(String),

    #[error("Upstream returned status {0}")]
    Status(u16),

    #[error("Upstream response could not be decoded: {0}")]
    Decode(String),

    #[error("Not authenticated")]
    Unauthenticated,
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            UpstreamError::Decode(err.to_string())
        } else {
            UpstreamError::Transport(err.to_string())
        }
    }
}

/// Client-local storage failures. Always soft: callers degrade to in-memory
/// defaults instead of surfacing them.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable")]
    Unavailable,

    #[error("Stored value is not valid JSON: {0}")]
    Corrupt(String),
}
