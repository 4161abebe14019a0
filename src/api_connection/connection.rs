use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use super::endpoints::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::OpenAiConfig;

#[derive(Debug, Error)]
pub enum ApiConnectionError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("API error {status}: {error_body}")]
    ApiError {
        status: StatusCode,
        error_body: String,
    },

    #[error("API returned no usable content: {0}")]
    EmptyResponse(String),

    #[error("Invalid audio payload: {0}")]
    InvalidAudio(#[from] base64::DecodeError),
}

impl ApiConnectionError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiConnectionError::ApiError { status, .. } => Some(*status),
            ApiConnectionError::NetworkError(err) => err.status(),
            _ => None,
        }
    }
}

/// Builds the HTTP client shared by every collaborator.
pub fn build_http_client(timeout: Duration) -> Result<Client, ApiConnectionError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Decodes a JSON body on success, or turns the status and body into an [`ApiConnectionError::ApiError`].
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiConnectionError> {
    let status = response.status();
    if status.is_success() {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    } else {
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        Err(ApiConnectionError::ApiError { status, error_body })
    }
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Turns a prompt into free-form recommendation text.
#[async_trait]
pub trait RecommendationGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ApiConnectionError>;
}

/// OpenAI-compatible chat-completions client.
#[derive(Debug, Clone)]
pub struct OpenAiChat {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiChat {
    pub fn new(client: Client, config: OpenAiConfig) -> Self {
        Self { client, config }
    }

    pub fn request_for_prompt(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: Some(self.config.temperature),
            max_tokens: self.config.max_tokens,
        }
    }

    pub async fn call_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ApiConnectionError> {
        let url = join_url(&self.config.base_url, "v1/chat/completions");
        debug!(%url, model = %request.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await?;

        read_json(response).await
    }
}

/// Pulls the first choice's text out of a completion, trimmed.
pub fn first_choice_content(response: &ChatCompletionResponse) -> Result<String, ApiConnectionError> {
    let content = response
        .choices
        .first()
        .and_then(|choice| choice.message.content.as_deref())
        .map(str::trim)
        .unwrap_or_default();

    if content.is_empty() {
        return Err(ApiConnectionError::EmptyResponse(
            "No response choices received from chat completion".to_string(),
        ));
    }
    Ok(content.to_string())
}

#[async_trait]
impl RecommendationGenerator for OpenAiChat {
    async fn generate(&self, prompt: &str) -> Result<String, ApiConnectionError> {
        let request = self.request_for_prompt(prompt);
        let response = self.call_chat_completion(&request).await?;
        first_choice_content(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_connection::endpoints::DEFAULT_OPENAI_MODEL;

    fn parse_response(body: &str) -> ChatCompletionResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_join_url_handles_slashes() {
        assert_eq!(join_url("https://a.b/", "/v1/x"), "https://a.b/v1/x");
        assert_eq!(join_url("https://a.b", "v1/x"), "https://a.b/v1/x");
    }

    #[test]
    fn test_request_for_prompt_uses_config() {
        let chat = OpenAiChat::new(
            Client::new(),
            OpenAiConfig {
                api_key: "k".to_string(),
                base_url: "http://localhost".to_string(),
                model: DEFAULT_OPENAI_MODEL.to_string(),
                temperature: 0.7,
                max_tokens: None,
            },
        );
        let request = chat.request_for_prompt("hello");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hello");
        assert!(value.get("max_tokens").is_none());
        assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_request_for_prompt_caps_tokens() {
        let chat = OpenAiChat::new(
            Client::new(),
            OpenAiConfig {
                api_key: "k".to_string(),
                base_url: "http://localhost".to_string(),
                model: DEFAULT_OPENAI_MODEL.to_string(),
                temperature: 0.7,
                max_tokens: Some(256),
            },
        );
        let value = serde_json::to_value(chat.request_for_prompt("hello")).unwrap();
        assert_eq!(value["max_tokens"], 256);
    }

    #[test]
    fn test_first_choice_content_trims() {
        let response = parse_response(
            r#"{"id":"c1","object":"chat.completion","created":1,"model":"gpt-3.5-turbo",
                "choices":[{"index":0,"message":{"role":"assistant","content":"  Walk 30 minutes.\n"},"finish_reason":"stop"}]}"#,
        );
        assert_eq!(first_choice_content(&response).unwrap(), "Walk 30 minutes.");
    }

    #[test]
    fn test_first_choice_content_empty_choices() {
        let response = parse_response(r#"{"id":"c1","created":1,"model":"m","choices":[]}"#);
        assert!(matches!(
            first_choice_content(&response),
            Err(ApiConnectionError::EmptyResponse(_))
        ));
    }
}
