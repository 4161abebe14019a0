use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use super::connection::{join_url, read_json, ApiConnectionError};
use super::endpoints::{NutrientsRequest, NutrientsResponse};
use crate::config::NutritionixConfig;
use crate::estimator::NutritionRecord;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("No nutrition data found for '{0}'")]
    ItemNotFound(String),

    #[error("Nutrition lookup failed for '{item}': {source}")]
    LookupFailed {
        item: String,
        #[source]
        source: ApiConnectionError,
    },
}

/// Resolves a free-text food description to its nutrition.
#[async_trait]
pub trait NutritionLookup: Send + Sync {
    async fn lookup(&self, item: &str) -> Result<NutritionRecord, LookupError>;
}

/// Nutritionix natural-language nutrients endpoint.
#[derive(Debug, Clone)]
pub struct NutritionixClient {
    client: Client,
    config: NutritionixConfig,
}

impl NutritionixClient {
    pub fn new(client: Client, config: NutritionixConfig) -> Self {
        Self { client, config }
    }

    async fn fetch(&self, item: &str) -> Result<NutrientsResponse, ApiConnectionError> {
        let url = join_url(&self.config.base_url, "v2/natural/nutrients");
        debug!(%url, item, "sending nutrients request");

        let response = self
            .client
            .post(&url)
            .header("x-app-id", &self.config.app_id)
            .header("x-app-key", &self.config.app_key)
            .json(&NutrientsRequest {
                query: item.to_string(),
            })
            .send()
            .await?;

        read_json(response).await
    }
}

#[async_trait]
impl NutritionLookup for NutritionixClient {
    async fn lookup(&self, item: &str) -> Result<NutritionRecord, LookupError> {
        match self.fetch(item).await {
            Ok(body) => record_from_response(item, body),
            // Nutritionix answers 404 when the query matched no food.
            Err(ApiConnectionError::ApiError { status, .. }) if status == StatusCode::NOT_FOUND => {
                Err(LookupError::ItemNotFound(item.to_string()))
            }
            Err(source) => Err(LookupError::LookupFailed {
                item: item.to_string(),
                source,
            }),
        }
    }
}

/// Takes the first food of a nutrients response. Missing numeric fields count as zero.
pub fn record_from_response(item: &str, body: NutrientsResponse) -> Result<NutritionRecord, LookupError> {
    let food = body
        .foods
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::ItemNotFound(item.to_string()))?;

    Ok(NutritionRecord {
        calories: food.nf_calories.unwrap_or(0.0),
        carbs_g: food.nf_total_carbohydrate.unwrap_or(0.0),
        protein_g: food.nf_protein.unwrap_or(0.0),
        fat_g: food.nf_total_fat.unwrap_or(0.0),
    })
}
