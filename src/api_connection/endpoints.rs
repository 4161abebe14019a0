use serde::{Deserialize, Serialize};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_GOOGLE_TRANSLATE_BASE_URL: &str = "https://translation.googleapis.com";
pub const DEFAULT_GOOGLE_TTS_BASE_URL: &str = "https://texttospeech.googleapis.com";
pub const DEFAULT_NUTRITIONIX_BASE_URL: &str = "https://trackapi.nutritionix.com";

// ---- Chat completions ----

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionResponseMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionChoice {
    pub message: ChatCompletionResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
    pub index: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: Option<u32>,
    pub total_tokens: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionResponse {
    pub id: String,
    #[serde(default)]
    pub object: Option<String>,
    pub created: u64,
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    #[serde(default)]
    pub usage: Option<ChatCompletionUsage>,
}

// ---- Google Translate v2 ----

#[derive(Debug, Serialize, Clone)]
pub struct TranslateRequest {
    pub q: String,
    pub target: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TranslateResponse {
    pub data: TranslateData,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TranslateData {
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub translated_text: String,
    #[serde(default)]
    pub detected_source_language: Option<String>,
}

// ---- Nutritionix natural-language nutrients ----

#[derive(Debug, Serialize, Clone)]
pub struct NutrientsRequest {
    pub query: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NutrientsResponse {
    #[serde(default)]
    pub foods: Vec<NutritionixFood>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct NutritionixFood {
    #[serde(default)]
    pub food_name: Option<String>,
    #[serde(default)]
    pub nf_calories: Option<f64>,
    #[serde(default)]
    pub nf_total_carbohydrate: Option<f64>,
    #[serde(default)]
    pub nf_protein: Option<f64>,
    #[serde(default)]
    pub nf_total_fat: Option<f64>,
}

// ---- Google Text-to-Speech v1 ----

#[derive(Debug, Serialize, Clone)]
pub struct SynthesizeRequest {
    pub input: SynthesisInput,
    pub voice: VoiceSelectionParams,
    #[serde(rename = "audioConfig")]
    pub audio_config: AudioConfig,
}

#[derive(Debug, Serialize, Clone)]
pub struct SynthesisInput {
    pub text: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct VoiceSelectionParams {
    #[serde(rename = "languageCode")]
    pub language_code: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct AudioConfig {
    #[serde(rename = "audioEncoding")]
    pub audio_encoding: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SynthesizeResponse {
    #[serde(rename = "audioContent")]
    pub audio_content: String,
}
