use std::collections::HashMap;
use std::env;
use std::path::Path;

use thiserror::Error;

use crate::api_connection::endpoints::{
    EDAMAM_API_URL, GEMINI_API_URL, GEMINI_DEFAULT_MODEL, OPENROUTER_API_URL,
    OPENROUTER_DEFAULT_MODEL,
};

pub const GENERATIVE_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const GENERATIVE_PROVIDER_VAR: &str = "AI_PROVIDER";
pub const GENERATIVE_MODEL_VAR: &str = "AI_MODEL";
pub const GENERATIVE_API_URL_VAR: &str = "AI_API_URL";
pub const FOOD_APP_ID_VAR: &str = "EDAMAM_APP_ID";
pub const FOOD_APP_KEY_VAR: &str = "EDAMAM_APP_KEY";
pub const FOOD_API_URL_VAR: &str = "EDAMAM_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenv::Error,
    },
}

/// Everything the two upstream integrations need, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantSettings {
    pub generative_api_key: Option<String>,
    pub generative_provider: String,
    pub generative_model: String,
    pub generative_api_url: String,
    pub food_app_id: Option<String>,
    pub food_app_key: Option<String>,
    pub food_api_url: String,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            generative_api_key: None,
            generative_provider: "gemini".to_string(),
            generative_model: GEMINI_DEFAULT_MODEL.to_string(),
            generative_api_url: GEMINI_API_URL.to_string(),
            food_app_id: None,
            food_app_key: None,
            food_api_url: EDAMAM_API_URL.to_string(),
        }
    }
}

impl AssistantSettings {
    /// Reads settings from the process environment, loading `.env` first if present.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings from a specific env file without touching the process environment.
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        let to_config_error = |source| ConfigError::EnvFile {
            path: path.display().to_string(),
            source,
        };
        let mut values = HashMap::new();
        for item in dotenv::from_path_iter(path).map_err(to_config_error)? {
            let (key, value) = item.map_err(to_config_error)?;
            values.insert(key, value);
        }
        Ok(Self::from_lookup(|key| values.get(key).cloned()))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let generative_provider = non_empty(GENERATIVE_PROVIDER_VAR)
            .map(|p| p.to_ascii_lowercase())
            .unwrap_or_else(|| "gemini".to_string());
        let (default_url, default_model) = match generative_provider.as_str() {
            "openrouter" => (OPENROUTER_API_URL, OPENROUTER_DEFAULT_MODEL),
            _ => (GEMINI_API_URL, GEMINI_DEFAULT_MODEL),
        };

        Self {
            generative_api_key: non_empty(GENERATIVE_API_KEY_VAR),
            generative_model: non_empty(GENERATIVE_MODEL_VAR)
                .unwrap_or_else(|| default_model.to_string()),
            generative_api_url: non_empty(GENERATIVE_API_URL_VAR)
                .unwrap_or_else(|| default_url.to_string()),
            generative_provider,
            food_app_id: non_empty(FOOD_APP_ID_VAR),
            food_app_key: non_empty(FOOD_APP_KEY_VAR),
            food_api_url: non_empty(FOOD_API_URL_VAR)
                .unwrap_or_else(|| EDAMAM_API_URL.to_string()),
        }
    }

    /// Both food-database credentials, only when both are present.
    pub fn food_credentials(&self) -> Option<(&str, &str)> {
        match (&self.food_app_id, &self.food_app_key) {
            (Some(id), Some(key)) => Some((id.as_str(), key.as_str())),
            _ => None,
        }
    }
}
