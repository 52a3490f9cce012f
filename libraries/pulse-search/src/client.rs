//! HTTP client for the track search service.

use crate::error::{Result, SearchError};
use crate::source::CatalogSource;
use crate::types::{SearchConfig, SearchResponse};
use async_trait::async_trait;
use pulse_core::Catalog;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the remote track search service.
///
/// # Example
///
/// ```ignore
/// use pulse_search::{SearchClient, SearchConfig};
///
/// let config = SearchConfig::default().with_api_key("my-rapidapi-key");
/// let client = SearchClient::new(config)?;
///
/// let catalog = client.search("arijit").await?;
/// println!("Found {} tracks", catalog.len());
/// ```
#[derive(Clone)]
pub struct SearchClient {
    http: Client,
    base_url: String,
    api_host: String,
    api_key: Option<String>,
}

impl SearchClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SearchConfig) -> Result<Self> {
        // Validate URL
        if config.base_url.is_empty() {
            return Err(SearchError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(SearchError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        if config.api_key.is_none() {
            warn!("No search API key configured, requests will be sent unauthenticated");
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("PulsePlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SearchError::Request)?;

        Ok(Self {
            http,
            base_url,
            api_host: config.api_host,
            api_key: config.api_key,
        })
    }

    /// Get the normalized service URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search the service for `query`.
    ///
    /// Any transport failure, non-success status or malformed body is an
    /// error; a partial catalog is never returned.
    pub async fn search(&self, query: &str) -> Result<Catalog> {
        let url = format!("{}/search", self.base_url);
        debug!(url = %url, query = %query, "Searching catalog");

        let mut request = self
            .http
            .get(&url)
            .query(&[("q", query)])
            .header("X-RapidAPI-Host", &self.api_host);
        if let Some(ref key) = self.api_key {
            request = request.header("X-RapidAPI-Key", key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                SearchError::ServerUnreachable(e.to_string())
            } else {
                SearchError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let body: SearchResponse = response.json().await.map_err(|e| {
                SearchError::ParseError(format!("Failed to parse search response: {}", e))
            })?;

            let catalog = body.into_catalog();
            debug!(query = %query, tracks = catalog.len(), "Fetched catalog");

            Ok(catalog)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(SearchError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

#[async_trait]
impl CatalogSource for SearchClient {
    async fn search(&self, query: &str) -> Result<Catalog> {
        SearchClient::search(self, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(SearchClient::new(SearchConfig::new("https://example.com")).is_ok());
        assert!(SearchClient::new(SearchConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(SearchClient::new(SearchConfig::new("")).is_err());
        assert!(SearchClient::new(SearchConfig::new("not-a-url")).is_err());
        assert!(SearchClient::new(SearchConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client =
            SearchClient::new(SearchConfig::new("https://example.com/")).expect("valid url");
        assert_eq!(client.base_url(), "https://example.com");
    }
}
