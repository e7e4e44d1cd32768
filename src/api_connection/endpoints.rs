use serde::{Deserialize, Serialize};

pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-1.5-flash";

pub const OPENROUTER_API_URL: &str = "https://openrouter.ai";
pub const OPENROUTER_DEFAULT_MODEL: &str = "qwen/qwen3-32b";

pub const EDAMAM_API_URL: &str = "https://api.edamam.com";
pub const EDAMAM_PARSER_PATH: &str = "/api/food-database/v2/parser";

// --- Gemini generateContent ---

#[derive(Debug, Serialize, Clone)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Candidate {
    pub content: Content,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
    }
}

// --- OpenRouter chat completions ---

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
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
    pub content: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionChoice {
    pub message: ChatCompletionResponseMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatCompletionChoice>,
}

// --- Edamam food-database parser ---

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FoodParserResponse {
    #[serde(default)]
    pub parsed: Option<Vec<ParsedEntry>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ParsedEntry {
    pub food: EdamamFood,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EdamamFood {
    #[serde(rename = "foodId")]
    pub food_id: String,
    #[serde(default)]
    pub label: String,
    pub category: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub nutrients: NutrientSummary,
}

/// Nutrients per 100g, keyed by Edamam nutrient codes on the wire.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct NutrientSummary {
    #[serde(rename = "ENERC_KCAL", skip_serializing_if = "Option::is_none")]
    pub energy_kcal: Option<f64>,
    #[serde(rename = "PROCNT", skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    #[serde(rename = "FAT", skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    #[serde(rename = "CHOCDF", skip_serializing_if = "Option::is_none")]
    pub carbohydrate_g: Option<f64>,
    #[serde(rename = "FIBTG", skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EdamamErrorBody {
    pub message: Option<String>,
}
