pub mod builder;
pub mod config;
pub mod error;
pub mod ingredients;
pub mod model;
pub mod providers;

pub use builder::ShoppingListBuilder;
pub use crate::config::GeneratorConfig;
pub use error::BasketError;
pub use ingredients::{
    estimate_costs, extract_ingredients, extract_ingredients_with, is_staple, load_price_lookup,
    parse_ingredient, parse_price_lookup, summarize_costs, StapleSet, DEFAULT_STAPLES,
};
pub use model::{
    CostEstimate, CostSummary, IngredientGroup, ParsedIngredient, PriceLookup, ShoppingList,
    DEFAULT_QUANTITY,
};
pub use providers::{MealPlanGenerator, ProviderFactory};

use log::info;

use crate::providers::OpenAIGenerator;

/// Generate meal plan text from a prompt using OpenAI (`gpt-4o`).
///
/// Any transport, authentication or API failure is returned as-is; there is no
/// retry. Callers wanting a deadline should wrap this in `tokio::time::timeout`.
pub async fn generate_meal_plan(prompt: &str, api_key: &str) -> Result<String, BasketError> {
    OpenAIGenerator::with_api_key(api_key).generate(prompt).await
}

/// Generate meal plan text with the default provider from configuration
pub async fn generate_meal_plan_with_config(
    prompt: &str,
    config: &GeneratorConfig,
) -> Result<String, BasketError> {
    let generator = ProviderFactory::get_default_provider(config)?;
    info!("Generating meal plan with {}", generator.provider_name());
    generator.generate(prompt).await
}
