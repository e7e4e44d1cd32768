use std::sync::Arc;

use crate::api_connection::{ApiConnectionError, Provider, TextGenerator};
use crate::config::AssistantSettings;
use crate::logging::EventLog;

use super::{
    fallback, prompt, FallbackReason, SuggestionRequest, SuggestionResult, SuggestionSource,
};

/// Result of asking the model, as a value rather than an error to catch.
#[derive(Debug)]
enum GenerationOutcome {
    Generated(String),
    Failed(ApiConnectionError),
}

pub struct RecipeAssistant {
    generator: Option<Arc<dyn TextGenerator>>,
    log: Arc<dyn EventLog>,
}

impl RecipeAssistant {
    /// Builds the assistant from settings. Without a generative key, or with an
    /// unknown provider name, every request is answered by the fallback template.
    pub fn from_settings(settings: &AssistantSettings, log: Arc<dyn EventLog>) -> Self {
        let generator = settings.generative_api_key.as_deref().and_then(|key| {
            match Provider::by_name(
                &settings.generative_provider,
                &settings.generative_api_url,
                key,
                &settings.generative_model,
            ) {
                Ok(provider) => Some(Arc::new(provider) as Arc<dyn TextGenerator>),
                Err(e) => {
                    log.error(&format!("Generative provider disabled: {}", e));
                    None
                }
            }
        });
        Self { generator, log }
    }

    pub fn with_generator(
        generator: Option<Arc<dyn TextGenerator>>,
        log: Arc<dyn EventLog>,
    ) -> Self {
        Self { generator, log }
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Always succeeds; falls back to the canned template when the model is
    /// unconfigured or its call fails.
    pub async fn get_recipe_suggestions(&self, request: &SuggestionRequest) -> SuggestionResult {
        let Some(generator) = &self.generator else {
            self.log
                .info("Generative API key not configured, using fallback suggestion");
            return Self::fallback(request, FallbackReason::MissingCredentials);
        };

        let prompt = prompt::combined_prompt(request.ingredients(), request.preferences());
        self.log.info(&format!(
            "Requesting recipe suggestion for {} ingredients",
            request.ingredients().len()
        ));

        match Self::generate(generator.as_ref(), &prompt).await {
            GenerationOutcome::Generated(text) => {
                self.log.info("Recipe suggestion generated");
                SuggestionResult {
                    success: true,
                    suggestion: text,
                    source: SuggestionSource::Model,
                }
            }
            GenerationOutcome::Failed(e) => {
                self.log
                    .error(&format!("Recipe suggestion failed, using fallback: {}", e));
                Self::fallback(request, FallbackReason::UpstreamFailure(e.to_string()))
            }
        }
    }

    async fn generate(generator: &dyn TextGenerator, prompt: &str) -> GenerationOutcome {
        match generator.generate(prompt).await {
            Ok(text) if !text.trim().is_empty() => GenerationOutcome::Generated(text),
            Ok(_) => GenerationOutcome::Failed(ApiConnectionError::EmptyResponse),
            Err(e) => GenerationOutcome::Failed(e),
        }
    }

    fn fallback(request: &SuggestionRequest, reason: FallbackReason) -> SuggestionResult {
        SuggestionResult {
            success: true,
            suggestion: fallback::render(request.ingredients(), request.preferences()),
            source: SuggestionSource::Fallback(reason),
        }
    }
}
