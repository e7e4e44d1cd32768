use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use super::endpoints::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, GenerateContentRequest,
    GenerateContentResponse,
};

#[derive(Debug, Error)]
pub enum ApiConnectionError {
    #[error("Network error: {0}")]
    NetworkError(reqwest::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("API error {status}: {error_body}")]
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
    #[error("API returned no text")]
    EmptyResponse,
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),
}

// Request URLs can carry credentials, so they never reach the message.
impl From<reqwest::Error> for ApiConnectionError {
    fn from(err: reqwest::Error) -> Self {
        ApiConnectionError::NetworkError(err.without_url())
    }
}

/// Anything that turns a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ApiConnectionError>;
}

#[derive(Clone, Debug)]
pub enum Provider {
    Gemini {
        client: Client,
        api_url: String,
        api_key: String,
        model: String,
    },
    OpenRouter {
        client: Client,
        api_url: String,
        api_key: String,
        model: String,
    },
}

impl Provider {
    pub fn gemini(api_url: &str, api_key: &str, model: &str) -> Self {
        Self::Gemini {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub fn openrouter(api_url: &str, api_key: &str, model: &str) -> Self {
        Self::OpenRouter {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Picks a variant by its configured name (`gemini` or `openrouter`).
    pub fn by_name(
        name: &str,
        api_url: &str,
        api_key: &str,
        model: &str,
    ) -> Result<Self, ApiConnectionError> {
        match name.to_ascii_lowercase().as_str() {
            "gemini" => Ok(Self::gemini(api_url, api_key, model)),
            "openrouter" => Ok(Self::openrouter(api_url, api_key, model)),
            other => Err(ApiConnectionError::UnsupportedProvider(other.to_string())),
        }
    }

    pub fn model(&self) -> &str {
        match self {
            Provider::Gemini { model, .. } | Provider::OpenRouter { model, .. } => model,
        }
    }

    async fn call_generate_content(
        client: &Client,
        api_url: &str,
        api_key: &str,
        model: &str,
        prompt: &str,
    ) -> Result<String, ApiConnectionError> {
        let url = format!("{}/v1beta/models/{}:generateContent", api_url, model);
        let response = client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(ApiConnectionError::ApiError { status, error_body });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        parsed
            .first_text()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .ok_or(ApiConnectionError::EmptyResponse)
    }

    async fn call_chat_completion(
        client: &Client,
        api_url: &str,
        api_key: &str,
        model: &str,
        prompt: &str,
    ) -> Result<String, ApiConnectionError> {
        let url = format!("{}/api/v1/chat/completions", api_url);
        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: Some(0.7),
            max_tokens: Some(2048),
        };

        let response = client
            .post(url)
            .bearer_auth(api_key)
            .header("X-Title", "DishAssistant")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(ApiConnectionError::ApiError { status, error_body });
        }

        let body = response.text().await?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;
        parsed
            .choices
            .first()
            .map(|choice| choice.message.content.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .ok_or(ApiConnectionError::EmptyResponse)
    }
}

#[async_trait]
impl TextGenerator for Provider {
    async fn generate(&self, prompt: &str) -> Result<String, ApiConnectionError> {
        match self {
            Provider::Gemini {
                client,
                api_url,
                api_key,
                model,
            } => Self::call_generate_content(client, api_url, api_key, model, prompt).await,
            Provider::OpenRouter {
                client,
                api_url,
                api_key,
                model,
            } => Self::call_chat_completion(client, api_url, api_key, model, prompt).await,
        }
    }
}
