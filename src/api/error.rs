use thiserror::Error;

/// Failures from the profile API.
///
/// `AuthExpired` is separated out so callers can route it to session
/// termination instead of showing it as an error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("session expired (401 from {endpoint})")]
    AuthExpired { endpoint: String },

    #[error("unexpected HTTP status {status} from {endpoint}: {message}")]
    UnexpectedStatus {
        status: u16,
        endpoint: String,
        message: String,
    },

    #[error("failed to deserialize {context} response: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    Rejected { message: String },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ApiError {
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::AuthExpired { .. })
    }
}
