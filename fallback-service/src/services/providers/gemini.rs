//! Gemini AI provider implementation.
//!
//! Sends the prompt to the `generateContent` method of Google's Generative
//! Language API as a single user turn, with no generation parameters.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ProviderError::NotConfigured(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    fn base(&self) -> &str {
        self.config.api_base.trim_end_matches('/')
    }

    /// Build the API URL for the configured model and the given method.
    fn api_url(&self, method: &str) -> String {
        format!("{}/models/{}:{}", self.base(), self.config.model, method)
    }
}

fn map_send_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::NetworkError(err.to_string())
    }
}

/// Concatenates the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Result<String, ProviderError> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_deref())
    {
        tracing::warn!(block_reason = reason, "Gemini blocked the prompt");
        return Err(ProviderError::ContentFiltered);
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(ProviderError::EmptyResponse)?;

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(ProviderError::ContentFiltered);
    }

    let texts: Vec<String> = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if texts.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    Ok(texts.concat())
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url("generateContent"))
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout
            } else {
                ProviderError::ApiError(format!("Failed to parse response: {}", e))
            }
        })?;

        extract_text(api_response)
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }

        // Listing models verifies both reachability and the key.
        let response = self
            .client
            .get(format!("{}/models", self.base()))
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(map_send_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ProviderError::ApiError(format!(
                "Health check failed: {}",
                response.status()
            )))
        }
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

/// Only text parts matter here; other part kinds deserialize with `text: None`.
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "gemini-1.5-flash";
    const GENERATE_PATH: &str = "/models/gemini-1.5-flash:generateContent";

    fn provider(server: &MockServer, api_key: &str, timeout: Duration) -> GeminiTextProvider {
        GeminiTextProvider::new(GeminiConfig {
            api_key: api_key.to_string(),
            model: MODEL.to_string(),
            api_base: server.uri(),
            timeout,
        })
        .unwrap()
    }

    fn text_reply(parts: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": parts },
                "finishReason": "STOP"
            }]
        }))
    }

    #[tokio::test]
    async fn sends_prompt_verbatim_and_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header(API_KEY_HEADER, "test-key"))
            .and(body_json(json!({
                "contents": [{ "role": "user", "parts": [{ "text": "Say hello" }] }]
            })))
            .respond_with(text_reply(json!([{ "text": "Hello!" }])))
            .expect(1)
            .mount(&server)
            .await;

        let text = provider(&server, "test-key", Duration::from_secs(5))
            .generate("Say hello")
            .await
            .unwrap();

        assert_eq!(text, "Hello!");
    }

    #[tokio::test]
    async fn joins_multiple_text_parts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(text_reply(json!([{ "text": "Hel" }, { "text": "lo!" }])))
            .mount(&server)
            .await;

        let text = provider(&server, "k", Duration::from_secs(5))
            .generate("hi")
            .await
            .unwrap();

        assert_eq!(text, "Hello!");
    }

    #[tokio::test]
    async fn too_many_requests_is_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&server)
            .await;

        let err = provider(&server, "k", Duration::from_secs(5))
            .generate("hi")
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::RateLimited));
    }

    #[tokio::test]
    async fn server_error_is_api_error_with_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let err = provider(&server, "bad", Duration::from_secs(5))
            .generate("hi")
            .await
            .unwrap_err();

        match err {
            ProviderError::ApiError(msg) => {
                assert!(msg.contains("403"));
                assert!(msg.contains("API key not valid"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn blocked_prompt_is_content_filtered() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": { "blockReason": "SAFETY" }
            })))
            .mount(&server)
            .await;

        let err = provider(&server, "k", Duration::from_secs(5))
            .generate("hi")
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::ContentFiltered));
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(
                text_reply(json!([{ "text": "late" }])).set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let err = provider(&server, "k", Duration::from_millis(50))
            .generate("hi")
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Timeout));
    }

    #[tokio::test]
    async fn health_check_lists_models() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .and(header(API_KEY_HEADER, "k"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "models": [] })))
            .expect(1)
            .mount(&server)
            .await;

        provider(&server, "k", Duration::from_secs(5))
            .health_check()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn health_check_without_key_is_not_configured() {
        let server = MockServer::start().await;
        let err = provider(&server, "", Duration::from_secs(5))
            .health_check()
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
    }

    #[test]
    fn safety_finish_reason_is_content_filtered() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }))
        .unwrap();
        assert!(matches!(
            extract_text(response),
            Err(ProviderError::ContentFiltered)
        ));
    }

    #[test]
    fn no_candidates_is_empty_response() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(ProviderError::EmptyResponse)
        ));
    }

    #[test]
    fn non_text_parts_are_skipped() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [
                    { "inlineData": { "mimeType": "image/png", "data": "" } },
                    { "text": "caption" }
                ]}
            }]
        }))
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "caption");
    }
}
