use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::BaseVideoSearch;
use crate::domains::courses::models::outline::VideoRef;

/// Fixed cap on video results per lookup.
pub const MAX_VIDEO_RESULTS: usize = 4;

/// YouTube Data API client for per-chapter video lookup.
pub struct YoutubeClient {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

/// YouTube search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
}

impl YoutubeClient {
    /// Create a new YouTube search client
    pub fn new(api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            api_key,
            client,
            base_url: "https://www.googleapis.com/youtube/v3".to_string(),
        })
    }

    /// Set a custom base URL (for proxies or test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[async_trait]
impl BaseVideoSearch for YoutubeClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<VideoRef>> {
        let max_results = max_results.min(MAX_VIDEO_RESULTS);

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("maxResults", &max_results.to_string()),
                ("type", "video"),
                ("key", &self.api_key),
            ])
            .send()
            .await
            .context("Failed to send YouTube search request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("YouTube API error {}: {}", status, body);
        }

        let search_response: SearchResponse = response
            .json()
            .await
            .context("Failed to parse YouTube response")?;

        let results = search_response
            .items
            .into_iter()
            .filter_map(|item| {
                item.id.video_id.map(|video_id| VideoRef {
                    video_id,
                    title: item.snippet.title,
                })
            })
            .collect();

        Ok(results)
    }
}

/// No-op video search for environments without a YouTube API key.
pub struct NoopVideoSearch;

#[async_trait]
impl BaseVideoSearch for NoopVideoSearch {
    async fn search(&self, _query: &str, _max_results: usize) -> Result<Vec<VideoRef>> {
        tracing::warn!("NoopVideoSearch: search called but no YOUTUBE_API_KEY configured");
        Ok(vec![])
    }
}
