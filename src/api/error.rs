//! Fetch error taxonomy.

use thiserror::Error;

/// Errors surfaced by a movie fetch.
///
/// The `Display` text is what the list screen shows, so each variant reads
/// as a complete sentence and no two variants render the same.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No connectivity, refused connection, timeout or any other transport failure
    #[error("Could not reach the movie server: {reason}")]
    NetworkFailure { reason: String },

    /// Response status outside 200-299
    #[error("Movie server responded with HTTP {0}")]
    HttpStatus(u16),

    /// Successful status but nothing in the body
    #[error("Movie server returned an empty response")]
    EmptyBody,

    /// Body is not a JSON array of movie records
    #[error("Could not read the movie list: {reason}")]
    DecodingFailure { reason: String },
}

impl FetchError {
    /// Stable identifier for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::NetworkFailure { .. } => "network_failure",
            FetchError::HttpStatus(_) => "http_status",
            FetchError::EmptyBody => "empty_body",
            FetchError::DecodingFailure { .. } => "decoding_failure",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::NetworkFailure {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::DecodingFailure {
            reason: err.to_string(),
        }
    }
}
