use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::BaseImageGenerator;

/// Image-provider client for banner artwork generation.
///
/// Carries a fixed 60s timeout so one slow upstream call cannot stall a
/// request indefinitely; callers treat failures here as non-fatal.
pub struct BannerClient {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

/// Image generation request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BannerRequest {
    width: u32,
    height: u32,
    input: String,
    model: String,
    aspect_ratio: String,
}

/// Image generation response - the provider returns a URL or base64 payload
#[derive(Debug, Deserialize)]
struct BannerResponse {
    #[serde(default)]
    image: Option<String>,
}

impl BannerClient {
    /// Create a new banner artwork client
    pub fn new(api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            api_key,
            client,
            base_url: "https://aigurulab.tech".to_string(),
        })
    }

    /// Set a custom base URL (for proxies or test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[async_trait]
impl BaseImageGenerator for BannerClient {
    async fn generate_image(&self, prompt: &str) -> Result<Option<String>> {
        let request = BannerRequest {
            width: 1024,
            height: 1024,
            input: prompt.to_string(),
            model: "flux".to_string(),
            aspect_ratio: "16:9".to_string(),
        };

        let response = self
            .client
            .post(format!("{}/api/generate-image", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send image generation request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Image provider error {}: {}", status, body);
        }

        let banner_response: BannerResponse = response
            .json()
            .await
            .context("Failed to parse image generation response")?;

        Ok(banner_response.image)
    }
}

/// No-op image generator for environments without an image-provider key.
pub struct NoopImageGenerator;

#[async_trait]
impl BaseImageGenerator for NoopImageGenerator {
    async fn generate_image(&self, _prompt: &str) -> Result<Option<String>> {
        tracing::warn!("NoopImageGenerator: generate_image called but no BANNER_API_KEY configured");
        Ok(None)
    }
}
