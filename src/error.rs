use thiserror::Error;

/// Why a page could not be fetched from the remote schools API.
///
/// None of these reach the browser as an HTTP error: the list view recovers
/// by rendering an empty table with the last-known pagination.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout and friends.
    #[error("request to schools API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("schools API answered HTTP {0}")]
    HttpStatus(reqwest::StatusCode),

    /// The body arrived but was not JSON.
    #[error("schools API returned an unreadable body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Startup configuration problems. These abort the process.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {reason}")]
    InvalidUrl { var: &'static str, reason: String },

    #[error("{var} has unsupported value {value:?}")]
    InvalidValue { var: &'static str, value: String },
}
