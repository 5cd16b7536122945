//! Structured extractor - turn raw generative-model text into parsed JSON.
//!
//! Models wrap their answers in explanatory prose or markdown fences; the
//! extractor strips fences, tries the whole text, then falls back to the
//! first `{` .. last `}` window. No I/O, never panics on malformed input.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Failure to extract a structured value from model output.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No parseable JSON object anywhere in the text
    #[error("no parseable JSON object in model response")]
    NoJson,

    /// JSON parsed but did not match the expected shape
    #[error("JSON does not match expected shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Extract the first top-level JSON value from raw model output.
pub fn extract_json(raw: &str) -> Result<Value, ExtractError> {
    let cleaned = strip_code_fences(raw);
    let cleaned = cleaned.trim();

    // Whole cleaned text first
    if let Ok(value) = serde_json::from_str::<Value>(cleaned) {
        return Ok(value);
    }

    // Fall back to the first '{' .. last '}' window
    let start = cleaned.find('{');
    let end = cleaned.rfind('}');
    if let (Some(start), Some(end)) = (start, end) {
        if end > start {
            if let Ok(value) = serde_json::from_str::<Value>(&cleaned[start..=end]) {
                return Ok(value);
            }
        }
    }

    Err(ExtractError::NoJson)
}

/// Extract and deserialize into a typed structure in one step.
pub fn extract_typed<T: DeserializeOwned>(raw: &str) -> Result<T, ExtractError> {
    let value = extract_json(raw)?;
    Ok(serde_json::from_value(value)?)
}

/// Remove markdown code-fence markers, language-tagged or bare.
fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "")
        .replace("```JSON", "")
        .replace("```", "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_json_is_idempotent() {
        let value = json!({"course": {"name": "Rust", "chapters": [{"chapterName": "Intro"}]}});
        let raw = serde_json::to_string(&value).unwrap();
        assert_eq!(extract_json(&raw).unwrap(), value);
    }

    #[test]
    fn test_fenced_json_with_language_tag() {
        let raw = "```json\n{\"name\": \"Rust\"}\n```";
        assert_eq!(extract_json(raw).unwrap(), json!({"name": "Rust"}));
    }

    #[test]
    fn test_fenced_json_without_language_tag() {
        let raw = "```\n{\"name\": \"Rust\"}\n```";
        assert_eq!(extract_json(raw).unwrap(), json!({"name": "Rust"}));
    }

    #[test]
    fn test_fencing_matches_unfenced_result() {
        let plain = "{\"a\": [1, 2, 3]}";
        let fenced = format!("```json\n{}\n```", plain);
        assert_eq!(extract_json(plain).unwrap(), extract_json(&fenced).unwrap());
    }

    #[test]
    fn test_prose_wrapped_object() {
        let raw = "Sure! Here is the course you asked for:\n\n{\"name\": \"Rust\"}\n\nLet me know if you need changes.";
        assert_eq!(extract_json(raw).unwrap(), json!({"name": "Rust"}));
    }

    #[test]
    fn test_garbage_is_typed_failure() {
        let result = extract_json("I could not generate a course, sorry.");
        assert!(matches!(result, Err(ExtractError::NoJson)));
    }

    #[test]
    fn test_unbalanced_braces_fail_cleanly() {
        let result = extract_json("{\"name\": \"Rust\"");
        assert!(matches!(result, Err(ExtractError::NoJson)));
    }

    #[test]
    fn test_extract_typed() {
        #[derive(serde::Deserialize)]
        struct Named {
            name: String,
        }

        let named: Named = extract_typed("```json\n{\"name\": \"Rust\"}\n```").unwrap();
        assert_eq!(named.name, "Rust");

        let wrong: Result<Named, _> = extract_typed("{\"title\": \"Rust\"}");
        assert!(matches!(wrong, Err(ExtractError::Shape(_))));
    }
}
