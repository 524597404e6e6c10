use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use wordbook_config::api::ApiConfig;
use wordbook_core::RemoteRecord;

use crate::{FetchError, LookupService};

/// Client for <https://dictionaryapi.dev>
#[derive(Clone)]
pub struct FreeDictionaryApi {
    client: reqwest::Client,
    base_url: Url,
}

impl FreeDictionaryApi {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Request URL for a word, e.g. `.../entries/en/king`. The word is one
    /// percent-encoded path segment.
    pub fn word_url(&self, word: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(&word.trim().to_lowercase());
        Ok(url)
    }
}

#[async_trait]
impl LookupService for FreeDictionaryApi {
    async fn fetch(&self, word: &str) -> Result<Vec<RemoteRecord>, FetchError> {
        if word.trim().is_empty() {
            return Err(FetchError::EmptyQuery);
        }

        let url = self.word_url(word)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NoDefinitions(word.trim().to_string()));
        }

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let records: Vec<RemoteRecord> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(format!("Failed to parse response: {}", e)))?;

        tracing::info!("Fetched {} record(s) for '{}'", records.len(), word.trim());
        Ok(records)
    }

    fn name(&self) -> &str {
        "Free Dictionary API"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> FreeDictionaryApi {
        FreeDictionaryApi::new(&ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 1,
        })
        .unwrap()
    }

    #[test]
    fn default_base_url() {
        let api = FreeDictionaryApi::new(&ApiConfig::default()).unwrap();
        assert_eq!(
            api.base_url(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/"
        );
        assert_eq!(
            api.word_url(" King ").unwrap().as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/king"
        );
    }

    #[test]
    fn word_url_adds_separator() {
        assert_eq!(
            api("http://localhost:9/en").word_url("hello").unwrap().as_str(),
            "http://localhost:9/en/hello"
        );
    }

    #[test]
    fn word_url_encodes_reserved_characters() {
        let api = api("http://localhost:9/en/");
        assert_eq!(
            api.word_url("C#").unwrap().as_str(),
            "http://localhost:9/en/c%23"
        );
        assert_eq!(
            api.word_url("and/or?").unwrap().as_str(),
            "http://localhost:9/en/and%2For%3F"
        );
        assert_eq!(
            api.word_url("ice cream").unwrap().as_str(),
            "http://localhost:9/en/ice%20cream"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            timeout_seconds: 1,
        };
        assert!(matches!(
            FreeDictionaryApi::new(&config),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn empty_query_is_rejected_without_request() {
        let result = api("http://localhost:9/").fetch("   ").await;
        assert!(matches!(result, Err(FetchError::EmptyQuery)));
    }
}
