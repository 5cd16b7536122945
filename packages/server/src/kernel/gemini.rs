// Generative text implementation using Gemini
//
// This is the infrastructure implementation of BaseGenerative.
// Business logic (what to prompt for) lives in domain effects.

use anyhow::{Context, Result};
use async_trait::async_trait;
use gemini_client::{GeminiClient, GEMINI_2_0_FLASH};

use super::BaseGenerative;

/// Gemini implementation of generative text capabilities
#[derive(Clone)]
pub struct GeminiGenerative {
    client: GeminiClient,
    model: String,
}

impl GeminiGenerative {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: GEMINI_2_0_FLASH.to_string(),
        }
    }

    /// Override the model id.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl BaseGenerative for GeminiGenerative {
    async fn generate(&self, prompt: &str) -> Result<String> {
        tracing::debug!(
            prompt_length = prompt.len(),
            model = %self.model,
            "Calling Gemini API"
        );

        let response = self
            .client
            .generate_text(&self.model, prompt)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    model = %self.model,
                    prompt_preview = %&prompt[..prompt.len().min(200)],
                    "Gemini API call failed"
                );
                e
            })
            .context("Failed to call Gemini API")?;

        tracing::info!(
            response_length = response.len(),
            model = %self.model,
            "Gemini API response received"
        );

        Ok(response)
    }
}
