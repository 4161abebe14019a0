use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::connection::{join_url, read_json, ApiConnectionError};
use super::endpoints::{TranslateRequest, TranslateResponse};
use crate::config::GoogleConfig;

/// Free text in, translated text out.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ApiConnectionError>;
}

/// Google Cloud Translation (v2 REST, API-key auth).
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    config: GoogleConfig,
}

impl GoogleTranslator {
    pub fn new(client: Client, config: GoogleConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, ApiConnectionError> {
        let url = join_url(&self.config.translate_base_url, "language/translate/v2");
        debug!(%url, target_language, "sending translation request");

        let request = TranslateRequest {
            q: text.to_string(),
            target: target_language.to_string(),
            format: "text".to_string(),
        };
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let body: TranslateResponse = read_json(response).await?;
        extract_translation(body)
    }
}

pub fn extract_translation(body: TranslateResponse) -> Result<String, ApiConnectionError> {
    body.data
        .translations
        .into_iter()
        .next()
        .map(|t| decode_html_entities(&t.translated_text))
        .ok_or_else(|| ApiConnectionError::EmptyResponse("Translation list was empty".to_string()))
}

/// The v2 API escapes a handful of characters even in text mode.
pub fn decode_html_entities(text: &str) -> String {
    // &amp; last so "&amp;quot;" decodes to "&quot;" and not '"'.
    text.replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
