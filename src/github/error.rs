//! Failure kinds of a release fetch.

use reqwest::StatusCode;

/// Why the release list could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// HTTP 404: the repository does not exist or has no releases
    NotFound,
    /// Any other non-success HTTP status
    Api(u16),
    /// The request could not complete
    Network(String),
    /// The body is not a list of releases
    Parse(String),
}

impl FetchError {
    /// Maps a non-success status to its failure kind.
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::NOT_FOUND {
            FetchError::NotFound
        } else {
            FetchError::Api(status.as_u16())
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::NotFound => write!(f, "Repository not found or has no releases."),
            FetchError::Api(status) => write!(f, "GitHub API Error: {}", status),
            FetchError::Network(msg) => write!(f, "{}", msg),
            FetchError::Parse(msg) => write!(f, "Malformed release data: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Parse(error.to_string())
    }
}
