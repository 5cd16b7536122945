//! Pure Gemini REST API client
//!
//! A clean, minimal client for the Gemini `generateContent` API with no
//! domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::GeminiClient;
//!
//! let client = GeminiClient::from_env()?;
//! let text = client.generate_text("gemini-2.0-flash", "Say hello").await?;
//! ```

pub mod error;
pub mod types;

pub use error::{GeminiError, Result};
pub use types::*;

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Default model for text generation.
pub const GEMINI_2_0_FLASH: &str = "gemini-2.0-flash";

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    ///
    /// The underlying HTTP client carries a 120s timeout so a stalled
    /// generation cannot hang a request indefinitely.
    pub fn new(api_key: impl Into<String>) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_default();

        Self {
            http_client,
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies or test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call `generateContent` for the given model.
    pub async fn generate_content(
        &self,
        model: &str,
        request: GenerateRequest,
    ) -> Result<GenerateResponse> {
        let start = std::time::Instant::now();
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, model = model, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(GeminiError::Api(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let generate_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        debug!(
            model = model,
            duration_ms = start.elapsed().as_millis(),
            candidates = generate_response.candidates.len(),
            "Gemini generateContent complete"
        );

        Ok(generate_response)
    }

    /// Single-turn text generation: send a plain-text prompt, return the
    /// first candidate's text.
    pub async fn generate_text(&self, model: &str, prompt: &str) -> Result<String> {
        let request =
            GenerateRequest::from_text(prompt).generation_config(types::GenerationConfig {
                response_mime_type: Some("text/plain".to_string()),
                ..Default::default()
            });

        let response = self.generate_content(model, request).await?;

        response
            .text()
            .ok_or_else(|| GeminiError::Api("No candidates in Gemini response".into()))
    }
}
