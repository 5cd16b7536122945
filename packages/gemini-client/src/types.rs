//! Gemini API request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// generateContent request
// =============================================================================

/// Content generation request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Conversation contents
    pub contents: Vec<Content>,

    /// Optional generation configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateRequest {
    /// Create a single-turn user request from plain text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user(text)],
            generation_config: None,
        }
    }

    /// Set the generation config.
    pub fn generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

/// A single content turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Role: "user" or "model"
    pub role: String,

    /// Content parts
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a user turn from plain text.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// A text part within a content turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Generation configuration.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature (0.0 to 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens in the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    /// Response MIME type (e.g., "text/plain", "application/json")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

// =============================================================================
// generateContent response
// =============================================================================

/// Content generation response.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A response candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: CandidateContent,

    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Candidate content (role + parts).
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate's parts, if any.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        if candidate.content.parts.is_empty() {
            return None;
        }
        Some(
            candidate
                .content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join(""),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateRequest::from_text("hello").generation_config(GenerationConfig {
            response_mime_type: Some("text/plain".to_string()),
            ..Default::default()
        });

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["responseMimeType"], "text/plain");
        assert!(json["generationConfig"]
            .as_object()
            .unwrap()
            .get("temperature")
            .is_none());
    }

    #[test]
    fn test_response_text_joins_parts() {
        let json = r#"{
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [{"text": "Hello, "}, {"text": "world"}]
                    },
                    "finishReason": "STOP"
                }
            ]
        }"#;

        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().unwrap(), "Hello, world");
    }

    #[test]
    fn test_response_text_empty_candidates() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.text().is_none());
    }
}
