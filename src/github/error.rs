use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("User '{0}' not found")]
    UserNotFound(String),

    #[error("API rate limit exceeded. Please try again later")]
    RateLimited,

    #[error("Failed to parse API response")]
    InvalidResponse(#[source] serde_json::Error),

    #[error("API request failed with status code {0}")]
    UnexpectedStatus(u16),

    #[error("API request failed: {0}")]
    Transport(#[source] reqwest::Error),
}
