use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api_connection::endpoints::{
    EdamamErrorBody, EdamamFood, FoodParserResponse, NutrientSummary, EDAMAM_PARSER_PATH,
};
use crate::config::AssistantSettings;
use crate::logging::EventLog;

pub const DEFAULT_SEARCH_LIMIT: u32 = 5;

#[derive(Debug, Error)]
pub enum FoodSearchError {
    #[error("Edamam API credentials missing")]
    MissingCredentials,
    #[error("Invalid ingredient query: {0}")]
    InvalidQuery(&'static str),
    #[error("Edamam API error: {0}")]
    Upstream(String),
    #[error("{0}")]
    Network(reqwest::Error),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

// The request URL holds `app_id` and `app_key`; drop it before the error is shown or logged.
impl From<reqwest::Error> for FoodSearchError {
    fn from(err: reqwest::Error) -> Self {
        FoodSearchError::Network(err.without_url())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientQuery {
    pub query: String,
    pub limit: u32,
}

impl IngredientQuery {
    pub fn new(query: &str, limit: Option<u32>) -> Result<Self, FoodSearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(FoodSearchError::InvalidQuery("query is empty"));
        }
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        if limit == 0 {
            return Err(FoodSearchError::InvalidQuery("limit must be positive"));
        }
        Ok(Self {
            query: query.to_string(),
            limit,
        })
    }
}

/// One matched food, normalized from the food-database payload.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FoodResult {
    #[serde(rename = "foodId")]
    pub food_id: String,
    pub label: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub nutrients: NutrientSummary,
}

impl From<EdamamFood> for FoodResult {
    fn from(food: EdamamFood) -> Self {
        Self {
            food_id: food.food_id,
            label: food.label,
            category: food.category,
            image: food.image,
            nutrients: food.nutrients,
        }
    }
}

/// Wire shape handed back to callers: `{success, foods}` or `{success:false, error}`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct IngredientSearchResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foods: Option<Vec<FoodResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<Vec<FoodResult>, FoodSearchError>> for IngredientSearchResponse {
    fn from(result: Result<Vec<FoodResult>, FoodSearchError>) -> Self {
        match result {
            Ok(foods) => Self {
                success: true,
                foods: Some(foods),
                error: None,
            },
            Err(e) => Self {
                success: false,
                foods: None,
                error: Some(e.to_string()),
            },
        }
    }
}

pub struct FoodDatabaseClient {
    client: Client,
    base_url: String,
    credentials: Option<(String, String)>,
    log: Arc<dyn EventLog>,
}

impl FoodDatabaseClient {
    pub fn new(settings: &AssistantSettings, log: Arc<dyn EventLog>) -> Self {
        Self {
            client: Client::new(),
            base_url: settings.food_api_url.trim_end_matches('/').to_string(),
            credentials: settings
                .food_credentials()
                .map(|(id, key)| (id.to_string(), key.to_string())),
            log,
        }
    }

    /// Looks up foods matching `query`. Never fails: errors come back as `success: false`.
    pub async fn search_ingredients(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> IngredientSearchResponse {
        self.try_search(query, limit).await.into()
    }

    async fn try_search(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Vec<FoodResult>, FoodSearchError> {
        let Some((app_id, app_key)) = &self.credentials else {
            self.log.error("Edamam API credentials missing");
            return Err(FoodSearchError::MissingCredentials);
        };
        let query = IngredientQuery::new(query, limit)?;

        self.log.info(&format!(
            "Searching Edamam for '{}' (limit {})",
            query.query, query.limit
        ));

        let limit = query.limit.to_string();
        let response = self
            .client
            .get(format!("{}{}", self.base_url, EDAMAM_PARSER_PATH))
            .query(&[
                ("app_id", app_id.as_str()),
                ("app_key", app_key.as_str()),
                ("ingr", query.query.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(FoodSearchError::from)
            .inspect_err(|e| self.log.error(&format!("Edamam request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<EdamamErrorBody>(&error_body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "Unknown error".to_string());
            self.log.error(&format!("Edamam API error {}: {}", status, message));
            return Err(FoodSearchError::Upstream(message));
        }

        let body = response.text().await?;
        let parsed: FoodParserResponse = serde_json::from_str(&body)
            .inspect_err(|e| self.log.error(&format!("Edamam response unreadable: {}", e)))?;
        let foods: Vec<FoodResult> = parsed
            .parsed
            .unwrap_or_default()
            .into_iter()
            .map(|entry| FoodResult::from(entry.food))
            .collect();

        self.log.info(&format!(
            "Edamam returned {} foods for '{}'",
            foods.len(),
            query.query
        ));
        Ok(foods)
    }
}
