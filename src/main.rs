use log::debug;
use std::env;
use std::time::Duration;

use meal_basket::{
    extract_ingredients_with, generate_meal_plan_with_config, load_price_lookup, BasketError,
    GeneratorConfig, ShoppingList,
};

const USAGE: &str = "Usage:
  meal-basket list <ingredients.txt>
  meal-basket cost <ingredients.txt> <prices.json>
  meal-basket plan <prompt>";

async fn read_lines(path: &str) -> Result<Vec<String>, BasketError> {
    let contents = tokio::fs::read_to_string(path).await?;
    Ok(contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).ok_or(USAGE)?;

    match command.as_str() {
        "list" => {
            let path = args.get(2).ok_or(USAGE)?;
            let lines = read_lines(path).await?;
            let items = extract_ingredients_with(&lines, &GeneratorConfig::load_staples());
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        "cost" => {
            let (path, prices_path) = match (args.get(2), args.get(3)) {
                (Some(path), Some(prices_path)) => (path, prices_path),
                _ => return Err(USAGE.into()),
            };
            let list = ShoppingList::builder()
                .lines(read_lines(path).await?)
                .staples(GeneratorConfig::load_staples())
                .prices(load_price_lookup(prices_path).await?)
                .build()?;
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        "plan" => {
            let prompt = args[2..].join(" ");
            if prompt.trim().is_empty() {
                return Err(USAGE.into());
            }
            let config = GeneratorConfig::load()?;
            debug!(
                "Loaded configuration with default provider '{}'",
                config.default_provider
            );
            let plan = tokio::time::timeout(
                Duration::from_secs(config.timeout),
                generate_meal_plan_with_config(&prompt, &config),
            )
            .await
            .map_err(|_| format!("Meal plan generation timed out after {}s", config.timeout))??;
            println!("{}", plan);
        }
        _ => return Err(USAGE.into()),
    }

    Ok(())
}
