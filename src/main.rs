use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use dish_assistant::cli::{parse_args, Command};
use dish_assistant::config::AssistantSettings;
use dish_assistant::food_search::{FoodDatabaseClient, IngredientSearchResponse};
use dish_assistant::logging::{init_tracing, EventLog, TracingLog};
use dish_assistant::suggestion::{RecipeAssistant, SuggestionRequest};

fn print_foods(response: &IngredientSearchResponse) {
    let foods = response.foods.as_deref().unwrap_or_default();
    if foods.is_empty() {
        println!("No foods found.");
        return;
    }
    for food in foods {
        let kcal = food
            .nutrients
            .energy_kcal
            .map(|k| format!("{:.0} kcal/100g", k))
            .unwrap_or_else(|| "kcal n/a".to_string());
        println!(
            "{} [{}] {} ({})",
            food.label,
            food.food_id,
            food.category.as_deref().unwrap_or("-"),
            kcal
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = parse_args();
    init_tracing(cli_args.verbose);

    let settings = match &cli_args.env_file {
        Some(path) => AssistantSettings::from_env_file(path)
            .with_context(|| format!("Failed to load settings from '{}'", path.display()))?,
        None => AssistantSettings::from_env(),
    };
    let log: Arc<dyn EventLog> = Arc::new(TracingLog);

    match cli_args.command {
        Command::Search { query, limit } => {
            let client = FoodDatabaseClient::new(&settings, log);
            let response = client.search_ingredients(&query, limit).await;
            if cli_args.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else if response.success {
                print_foods(&response);
            }
            if !response.success {
                return Err(anyhow!(response
                    .error
                    .unwrap_or_else(|| "Ingredient search failed".to_string())));
            }
        }
        Command::Suggest {
            ingredients,
            preferences,
        } => {
            let request = SuggestionRequest::new(&ingredients, &preferences)
                .context("Cannot build a suggestion request")?;
            let assistant = RecipeAssistant::from_settings(&settings, log);
            let result = assistant.get_recipe_suggestions(&request).await;
            if cli_args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.suggestion);
            }
        }
    }

    Ok(())
}
