mod free_dictionary;

pub use free_dictionary::FreeDictionaryApi;

use wordbook_core::RemoteRecord;

/// Remote word lookup provider
#[async_trait::async_trait]
pub trait LookupService: Send + Sync {
    /// Fetch the raw records describing `word`
    async fn fetch(&self, word: &str) -> Result<Vec<RemoteRecord>, FetchError>;

    /// Provider name for logs and messages
    fn name(&self) -> &str;
}

/// Failure talking to the remote lookup service
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("No definitions found for '{0}'")]
    NoDefinitions(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Nothing to look up")]
    EmptyQuery,
}
