pub mod api_connection;
pub mod cli;
pub mod config;
pub mod food_search;
pub mod logging;
pub mod suggestion;

pub use config::AssistantSettings;
pub use food_search::{FoodDatabaseClient, FoodResult, IngredientSearchResponse};
pub use suggestion::{RecipeAssistant, SuggestionRequest, SuggestionResult};
