mod client;

pub use client::WikipediaClient;

/// Source of plain-text definitions for a term
#[async_trait::async_trait]
pub trait DefinitionSource: Send + Sync {
    /// First non-empty plain-text extract for `term` in `lang`
    async fn fetch_definition(&self, term: &str, lang: &str) -> Result<String, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("No extract found for '{0}'")]
    NotFound(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(err)
        }
    }
}
