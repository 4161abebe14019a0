//! The request pipeline around the estimator: translate the food list, look up
//! each item, aggregate, and ask for a recommendation.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::api_connection::{
    ApiConnectionError, NutritionLookup, RecommendationGenerator, SpeechSynthesizer, Translator,
};
use crate::estimator::{
    aggregate_nutrition, compute_bmr, compute_daily_calories, ActivityLevel, BodyProfile,
    NutritionRecord, NutritionTotals,
};
use crate::food_list::split_food_list;
use crate::recommendation::{build_prompt, PromptInput};

/// Language the nutrition database understands.
pub const LOOKUP_LANGUAGE: &str = "en";

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("Translation failed: {0}")]
    Translation(#[source] ApiConnectionError),

    #[error("Recommendation generation failed: {0}")]
    Recommendation(#[source] ApiConnectionError),

    #[error("Speech synthesis failed: {0}")]
    Speech(#[source] ApiConnectionError),

    #[error("No speech synthesizer configured")]
    SpeechUnavailable,
}

#[derive(Debug, Clone)]
pub struct AdviceRequest {
    pub profile: BodyProfile,
    pub activity: ActivityLevel,
    /// Comma-separated, in whatever language the user typed.
    pub food_text: String,
    /// Language the recommendation should be written in.
    pub language: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FoodLookup {
    pub item: String,
    pub record: Option<NutritionRecord>,
    pub failure: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Advice {
    pub bmr: f64,
    pub daily_calories: f64,
    pub foods: Vec<String>,
    pub lookups: Vec<FoodLookup>,
    pub totals: NutritionTotals,
    pub text: String,
}

impl Advice {
    /// Items whose lookup failed, in input order.
    pub fn unresolved(&self) -> Vec<String> {
        unresolved_items(&self.lookups)
    }
}

fn unresolved_items(lookups: &[FoodLookup]) -> Vec<String> {
    lookups
        .iter()
        .filter(|l| l.record.is_none())
        .map(|l| l.item.clone())
        .collect()
}

pub struct DietAdvisor {
    lookup: Box<dyn NutritionLookup>,
    generator: Box<dyn RecommendationGenerator>,
    translator: Option<Box<dyn Translator>>,
    speech: Option<Box<dyn SpeechSynthesizer>>,
}

impl DietAdvisor {
    pub fn new(lookup: Box<dyn NutritionLookup>, generator: Box<dyn RecommendationGenerator>) -> Self {
        Self {
            lookup,
            generator,
            translator: None,
            speech: None,
        }
    }

    /// Food text is translated before lookup only when a translator is attached.
    pub fn with_translator(mut self, translator: Box<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn with_speech(mut self, speech: Box<dyn SpeechSynthesizer>) -> Self {
        self.speech = Some(speech);
        self
    }

    /// Runs one request end to end. Translation and generation failures abort the
    /// request; a failed food lookup only drops that item from the totals.
    pub async fn advise(&self, request: &AdviceRequest) -> Result<Advice, AdvisorError> {
        let bmr = compute_bmr(&request.profile);
        let daily_calories = compute_daily_calories(bmr, request.activity);
        info!(bmr, daily_calories, activity = %request.activity, "computed calorie target");

        let food_text = match &self.translator {
            Some(translator) => {
                let translated = translator
                    .translate(&request.food_text, LOOKUP_LANGUAGE)
                    .await
                    .map_err(AdvisorError::Translation)?;
                info!(original = %request.food_text, %translated, "translated food list");
                translated
            }
            None => request.food_text.clone(),
        };
        let foods = split_food_list(&food_text);

        let mut lookups = Vec::with_capacity(foods.len());
        for item in &foods {
            let lookup = match self.lookup.lookup(item).await {
                Ok(record) => FoodLookup {
                    item: item.clone(),
                    record: Some(record),
                    failure: None,
                },
                Err(e) => {
                    warn!(%item, error = %e, "nutrition lookup failed; item excluded from totals");
                    FoodLookup {
                        item: item.clone(),
                        record: None,
                        failure: Some(e.to_string()),
                    }
                }
            };
            lookups.push(lookup);
        }

        let totals = aggregate_nutrition(lookups.iter().map(|l| l.record.as_ref()));
        info!(
            items = foods.len(),
            resolved = lookups.iter().filter(|l| l.record.is_some()).count(),
            calories = totals.calories,
            "aggregated nutrition"
        );

        let unresolved = unresolved_items(&lookups);
        let prompt = build_prompt(&PromptInput {
            foods: &foods,
            unresolved: &unresolved,
            totals: &totals,
            daily_calories,
            language: &request.language,
        });
        let text = self
            .generator
            .generate(&prompt)
            .await
            .map_err(AdvisorError::Recommendation)?;
        info!(chars = text.chars().count(), "received recommendation");

        Ok(Advice {
            bmr,
            daily_calories,
            foods,
            lookups,
            totals,
            text,
        })
    }

    /// Reads the recommendation text aloud.
    pub async fn speak(&self, advice: &Advice, language: &str) -> Result<Vec<u8>, AdvisorError> {
        let speech = self.speech.as_ref().ok_or(AdvisorError::SpeechUnavailable)?;
        speech
            .synthesize(&advice.text, language)
            .await
            .map_err(AdvisorError::Speech)
    }
}
