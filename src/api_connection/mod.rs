pub mod connection;
pub mod endpoints;
pub mod nutritionix;
pub mod speech;
pub mod translator;

pub use connection::{build_http_client, ApiConnectionError, OpenAiChat, RecommendationGenerator};
pub use nutritionix::{LookupError, NutritionLookup, NutritionixClient};
pub use speech::{GoogleSpeech, SpeechSynthesizer};
pub use translator::{GoogleTranslator, Translator};
