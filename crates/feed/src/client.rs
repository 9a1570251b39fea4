use std::time::Duration;

use reqwest::Client;

use crate::models::FeedItem;
use crate::parser::parse_podcast_feed;
use crate::FeedError;

const FETCH_TIMEOUT_SECS: u64 = 10;

/// Podcast RSS feed fetcher client
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Create a new FeedClient with a default reqwest Client
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent("nettgefluester-backend")
            .build()
            .expect("Failed to build HTTP client");
        Self { client }
    }

    /// Create a new FeedClient with a custom reqwest Client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch and parse a podcast RSS feed
    pub async fn fetch(&self, url: &str) -> crate::Result<Vec<FeedItem>> {
        tracing::debug!("Fetching podcast feed from: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::Parse(format!(
                "HTTP {} when fetching {}",
                status, url
            )));
        }

        let bytes = response.bytes().await?;
        let items = parse_podcast_feed(&bytes)?;

        tracing::debug!("Parsed {} items from podcast feed", items.len());
        Ok(items)
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}
