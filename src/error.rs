use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("LLM server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    #[error("LLM request timed out after {0:?}")]
    Timeout(Duration),

    #[error("LLM authentication failed: {0}")]
    Unauthorized(String),

    #[error("Rate limit or quota exceeded: {0}")]
    RateLimited(String),

    #[error("LLM rejected the request: {0}")]
    InvalidRequest(String),

    #[error("Request text is empty")]
    EmptyRequest,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid taxonomy: {0}")]
    Taxonomy(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::RateLimited(_)
                | Error::Timeout(_)
                | Error::Network(_)
                | Error::ServerError { .. }
        )
    }
}
