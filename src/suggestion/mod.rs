pub mod assistant;
pub mod fallback;
pub mod prompt;

use serde::Serialize;
use thiserror::Error;

pub use assistant::RecipeAssistant;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuggestionRequestError {
    #[error("at least one ingredient is required")]
    NoIngredients,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    ingredients: Vec<String>,
    preferences: String,
}

impl SuggestionRequest {
    /// Blank ingredient names are dropped; an empty list is rejected.
    pub fn new<I, S>(ingredients: I, preferences: &str) -> Result<Self, SuggestionRequestError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ingredients: Vec<String> = ingredients
            .into_iter()
            .map(|i| i.as_ref().trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();
        if ingredients.is_empty() {
            return Err(SuggestionRequestError::NoIngredients);
        }
        Ok(Self {
            ingredients,
            preferences: preferences.trim().to_string(),
        })
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn preferences(&self) -> &str {
        &self.preferences
    }
}

/// Why a suggestion came from the canned template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    MissingCredentials,
    UpstreamFailure(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionSource {
    Model,
    Fallback(FallbackReason),
}

/// Always `success: true` on the wire; `source` stays local.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SuggestionResult {
    pub success: bool,
    pub suggestion: String,
    #[serde(skip)]
    pub source: SuggestionSource,
}

impl SuggestionResult {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, SuggestionSource::Fallback(_))
    }
}
