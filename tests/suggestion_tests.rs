mod common;

use std::sync::Arc;

use async_trait::async_trait;
use common::{settings_for, Level, RecordingLog};
use dish_assistant::api_connection::{ApiConnectionError, TextGenerator};
use dish_assistant::config::AssistantSettings;
use dish_assistant::logging::SilentLog;
use dish_assistant::suggestion::fallback::{self, UNAVAILABLE_MARKER};
use dish_assistant::suggestion::{
    FallbackReason, RecipeAssistant, SuggestionRequest, SuggestionSource,
};
use serde_json::json;
use wiremock::matchers::{any, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GEMINI_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

fn tomato_rice() -> SuggestionRequest {
    SuggestionRequest::new(["tomato", "rice"], "").unwrap()
}

fn gemini_reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"parts": [{"text": text}], "role": "model"},
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn test_missing_key_returns_fallback_without_network() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let settings = AssistantSettings {
        generative_api_key: None,
        ..settings_for(&server.uri())
    };
    let log = RecordingLog::new();
    let assistant = RecipeAssistant::from_settings(&settings, log.clone());

    let result = assistant.get_recipe_suggestions(&tomato_rice()).await;

    assert!(result.success);
    assert!(result.suggestion.contains("tomato, rice"));
    assert!(result.suggestion.contains(UNAVAILABLE_MARKER));
    assert_eq!(
        result.source,
        SuggestionSource::Fallback(FallbackReason::MissingCredentials)
    );
    assert!(log.errors().is_empty());
}

#[tokio::test]
async fn test_gemini_text_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(header("x-goog-api-key", "test-gemini-key"))
        .and(body_string_contains("tomato, rice"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_reply("# Томатне різото\n\nСмачно.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let assistant =
        RecipeAssistant::from_settings(&settings_for(&server.uri()), Arc::new(SilentLog));
    let result = assistant.get_recipe_suggestions(&tomato_rice()).await;

    assert!(result.success);
    assert_eq!(result.suggestion, "# Томатне різото\n\nСмачно.");
    assert_eq!(result.source, SuggestionSource::Model);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"success": true, "suggestion": "# Томатне різото\n\nСмачно."})
    );
}

#[tokio::test]
async fn test_prompt_carries_preferences_only_when_given() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(body_string_contains("Мої побажання: vegan."))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("# Vegan bowl")))
        .expect(1)
        .mount(&server)
        .await;

    let assistant =
        RecipeAssistant::from_settings(&settings_for(&server.uri()), Arc::new(SilentLog));
    let request = SuggestionRequest::new(["tofu"], "vegan").unwrap();
    let result = assistant.get_recipe_suggestions(&request).await;

    assert_eq!(result.suggestion, "# Vegan bowl");
}

#[tokio::test]
async fn test_upstream_error_falls_back_and_logs() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("RESOURCE_EXHAUSTED"))
        .expect(1)
        .mount(&server)
        .await;

    let log = RecordingLog::new();
    let assistant = RecipeAssistant::from_settings(&settings_for(&server.uri()), log.clone());
    let request = tomato_rice();
    let result = assistant.get_recipe_suggestions(&request).await;

    assert!(result.success);
    assert_eq!(
        result.suggestion,
        fallback::render(request.ingredients(), request.preferences())
    );
    assert!(matches!(
        result.source,
        SuggestionSource::Fallback(FallbackReason::UpstreamFailure(ref m)) if m.contains("429")
    ));
    let errors = log.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("RESOURCE_EXHAUSTED"));
}

#[tokio::test]
async fn test_malformed_reply_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let assistant =
        RecipeAssistant::from_settings(&settings_for(&server.uri()), Arc::new(SilentLog));
    let result = assistant.get_recipe_suggestions(&tomato_rice()).await;

    assert!(result.success);
    assert!(result.is_fallback());
    assert!(result.suggestion.contains(UNAVAILABLE_MARKER));
}

#[tokio::test]
async fn test_fallback_looks_the_same_for_missing_key_and_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let request = SuggestionRequest::new(["egg", "flour"], "breakfast").unwrap();
    let failing =
        RecipeAssistant::from_settings(&settings_for(&server.uri()), Arc::new(SilentLog));
    let unconfigured =
        RecipeAssistant::from_settings(&AssistantSettings::default(), Arc::new(SilentLog));

    let a = failing.get_recipe_suggestions(&request).await;
    let b = unconfigured.get_recipe_suggestions(&request).await;

    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
    assert_ne!(a.source, b.source);
}

#[tokio::test]
async fn test_openrouter_provider_is_supported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-or-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "gen-1",
            "choices": [{
                "index": 0,
                "finish_reason": "stop",
                "message": {"role": "assistant", "content": "# Fried rice"}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let settings = AssistantSettings {
        generative_api_key: Some("sk-or-test".to_string()),
        generative_provider: "openrouter".to_string(),
        generative_model: "qwen/qwen3-32b".to_string(),
        generative_api_url: server.uri(),
        ..Default::default()
    };
    let log = RecordingLog::new();
    let assistant = RecipeAssistant::from_settings(&settings, log.clone());
    let result = assistant.get_recipe_suggestions(&tomato_rice()).await;

    assert_eq!(result.suggestion, "# Fried rice");
    assert!(log.events().iter().all(|(level, _)| *level == Level::Info));
}

#[tokio::test]
async fn test_network_failure_keeps_key_out_of_log_and_reason() {
    // Nothing listens on the discard port.
    let log = RecordingLog::new();
    let assistant =
        RecipeAssistant::from_settings(&settings_for("http://127.0.0.1:9"), log.clone());

    let result = assistant.get_recipe_suggestions(&tomato_rice()).await;

    assert!(result.success);
    match &result.source {
        SuggestionSource::Fallback(FallbackReason::UpstreamFailure(reason)) => {
            assert!(reason.starts_with("Network error"));
            assert!(!reason.contains("test-gemini-key"));
        }
        other => panic!("unexpected source: {:?}", other),
    }
    let errors = log.errors();
    assert_eq!(errors.len(), 1);
    assert!(!errors[0].contains("test-gemini-key"));
}

struct Unreachable;

#[async_trait]
impl TextGenerator for Unreachable {
    async fn generate(&self, _prompt: &str) -> Result<String, ApiConnectionError> {
        Err(ApiConnectionError::EmptyResponse)
    }
}

#[tokio::test]
async fn test_always_succeeds_for_any_ingredient_list() {
    let assistant =
        RecipeAssistant::with_generator(Some(Arc::new(Unreachable)), Arc::new(SilentLog));
    let cases: [(&[&str], &str); 4] = [
        (&["tomato"], ""),
        (&["курка", "картопля", "цибуля"], "без гострого"),
        (&["a", "b", "c", "d", "e", "f"], "   "),
        (&["salt"], "10 minutes"),
    ];

    for (ingredients, preferences) in cases {
        let request = SuggestionRequest::new(ingredients.iter().copied(), preferences).unwrap();
        let result = assistant.get_recipe_suggestions(&request).await;
        assert!(result.success);
        assert!(!result.suggestion.is_empty());
        assert!(result.suggestion.contains(&ingredients.join(", ")));
    }
}
