use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::api_connection::endpoints::{
    DEFAULT_GOOGLE_TRANSLATE_BASE_URL, DEFAULT_GOOGLE_TTS_BASE_URL, DEFAULT_NUTRITIONIX_BASE_URL,
    DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL, DEFAULT_TEMPERATURE,
};

pub const OPENAI_API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";
pub const GOOGLE_API_KEY_ENV_VAR: &str = "GOOGLE_API_KEY";
pub const NUTRITIONIX_APP_ID_ENV_VAR: &str = "NUTRITIONIX_APP_ID";
pub const NUTRITIONIX_APP_KEY_ENV_VAR: &str = "NUTRITIONIX_APP_KEY";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("API key not found in environment: {0}")]
    MissingApiKey(String),

    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue { var: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    /// Completion length cap; `None` leaves it to the API default.
    pub max_tokens: Option<u32>,
}

/// Shared by translation and speech synthesis; both accept the same API key.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleConfig {
    pub api_key: String,
    pub translate_base_url: String,
    pub tts_base_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NutritionixConfig {
    pub app_id: String,
    pub app_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub openai: OpenAiConfig,
    pub nutritionix: NutritionixConfig,
    /// `None` when no Google key is set; translation and speech are then unavailable.
    pub google: Option<GoogleConfig>,
    pub http_timeout: Duration,
}

impl AppConfig {
    /// Reads the process environment. Callers load `.env` beforehand if they want it.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let require = |name: &str| get(name).ok_or_else(|| ConfigError::MissingApiKey(name.to_string()));

        let openai = OpenAiConfig {
            api_key: require(OPENAI_API_KEY_ENV_VAR)?,
            base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            temperature: parse_or("OPENAI_TEMPERATURE", get("OPENAI_TEMPERATURE"), DEFAULT_TEMPERATURE)?,
            max_tokens: parse_optional("OPENAI_MAX_TOKENS", get("OPENAI_MAX_TOKENS"))?,
        };

        let nutritionix = NutritionixConfig {
            app_id: require(NUTRITIONIX_APP_ID_ENV_VAR)?,
            app_key: require(NUTRITIONIX_APP_KEY_ENV_VAR)?,
            base_url: get("NUTRITIONIX_BASE_URL")
                .unwrap_or_else(|| DEFAULT_NUTRITIONIX_BASE_URL.to_string()),
        };

        let google = get(GOOGLE_API_KEY_ENV_VAR).map(|api_key| GoogleConfig {
            api_key,
            translate_base_url: get("GOOGLE_TRANSLATE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GOOGLE_TRANSLATE_BASE_URL.to_string()),
            tts_base_url: get("GOOGLE_TTS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GOOGLE_TTS_BASE_URL.to_string()),
        });

        let timeout_secs = parse_or("HTTP_TIMEOUT_SECS", get("HTTP_TIMEOUT_SECS"), DEFAULT_HTTP_TIMEOUT_SECS)?;

        Ok(Self {
            openai,
            nutritionix,
            google,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn require_google(&self) -> Result<&GoogleConfig, ConfigError> {
        self.google
            .as_ref()
            .ok_or_else(|| ConfigError::MissingApiKey(GOOGLE_API_KEY_ENV_VAR.to_string()))
    }
}

fn parse_or<T: FromStr>(var: &str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            value,
        }),
    }
}

fn parse_optional<T: FromStr>(var: &str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    raw.map(|value| {
        value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            value,
        })
    })
    .transpose()
}
