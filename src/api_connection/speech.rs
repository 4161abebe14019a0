use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use tracing::debug;

use super::connection::{join_url, read_json, ApiConnectionError};
use super::endpoints::{
    AudioConfig, SynthesizeRequest, SynthesizeResponse, SynthesisInput, VoiceSelectionParams,
};
use crate::config::GoogleConfig;

/// Text in, playable audio bytes out.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, ApiConnectionError>;
}

/// Google Cloud Text-to-Speech, MP3 output.
#[derive(Debug, Clone)]
pub struct GoogleSpeech {
    client: Client,
    config: GoogleConfig,
}

impl GoogleSpeech {
    pub fn new(client: Client, config: GoogleConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleSpeech {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, ApiConnectionError> {
        let url = join_url(&self.config.tts_base_url, "v1/text:synthesize");
        let language_code = voice_language_code(language);
        debug!(%url, %language_code, chars = text.chars().count(), "sending speech synthesis request");

        let request = SynthesizeRequest {
            input: SynthesisInput {
                text: text.to_string(),
            },
            voice: VoiceSelectionParams { language_code },
            audio_config: AudioConfig {
                audio_encoding: "MP3".to_string(),
            },
        };
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let body: SynthesizeResponse = read_json(response).await?;
        decode_audio(&body)
    }
}

pub fn decode_audio(body: &SynthesizeResponse) -> Result<Vec<u8>, ApiConnectionError> {
    let audio = STANDARD.decode(body.audio_content.as_bytes())?;
    if audio.is_empty() {
        return Err(ApiConnectionError::EmptyResponse(
            "Speech synthesis returned no audio".to_string(),
        ));
    }
    Ok(audio)
}

/// Expands a bare language code to the region the voices are published under.
pub fn voice_language_code(language: &str) -> String {
    match language {
        "ko" => "ko-KR".to_string(),
        "en" => "en-US".to_string(),
        "ja" => "ja-JP".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_audio() {
        let body = SynthesizeResponse {
            audio_content: STANDARD.encode(b"ID3\x03mp3-bytes"),
        };
        assert_eq!(decode_audio(&body).unwrap(), b"ID3\x03mp3-bytes".to_vec());
    }

    #[test]
    fn test_decode_audio_rejects_bad_base64() {
        let body = SynthesizeResponse {
            audio_content: "not base64!!".to_string(),
        };
        assert!(matches!(decode_audio(&body), Err(ApiConnectionError::InvalidAudio(_))));
    }

    #[test]
    fn test_decode_audio_rejects_empty() {
        let body = SynthesizeResponse {
            audio_content: String::new(),
        };
        assert!(matches!(decode_audio(&body), Err(ApiConnectionError::EmptyResponse(_))));
    }

    #[test]
    fn test_voice_language_code() {
        assert_eq!(voice_language_code("ko"), "ko-KR");
        assert_eq!(voice_language_code("en-GB"), "en-GB");
    }

    #[test]
    fn test_request_wire_format() {
        let request = SynthesizeRequest {
            input: SynthesisInput { text: "hi".to_string() },
            voice: VoiceSelectionParams {
                language_code: "en-US".to_string(),
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3".to_string(),
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["voice"]["languageCode"], "en-US");
        assert_eq!(value["audioConfig"]["audioEncoding"], "MP3");
        assert_eq!(value["input"]["text"], "hi");
    }
}
