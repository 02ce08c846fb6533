use std::time::Duration;

use tracing::debug;

use crate::config::MetadataConfig;

/// Thin client for the third-party movie metadata API (Kinopoisk). The
/// server only proxies lookups; responses are passed through as-is.
pub struct MetadataClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("No metadata API key configured")]
    MissingApiKey,
    #[error("Metadata request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Metadata API returned status {0}")]
    Status(u16),
}

impl MetadataClient {
    pub fn new(config: &MetadataConfig) -> Result<Self, MetadataError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub async fn search(&self, query: &str) -> Result<serde_json::Value, MetadataError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(MetadataError::MissingApiKey)?;

        let url = format!("{}/movie/search", self.base_url);
        debug!("Metadata lookup: {}", query);

        let response = self
            .client
            .get(&url)
            .header("X-API-KEY", api_key)
            .header("accept", "application/json")
            .query(&[("query", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MetadataError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}
