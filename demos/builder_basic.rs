//! Basic usage of the shopping list builder
//!
//! Groups a handful of recipe lines, drops pantry staples and prices the rest.
//!
//! Run with: cargo run --example builder_basic

use meal_basket::{ShoppingList, StapleSet};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Default staples ===");
    let list = ShoppingList::builder()
        .lines([
            "Chicken Breast – 200g",
            "Olive Oil – 1 tbsp",
            "Jasmine Rice - 150g",
            "Chicken Breast – 150g",
            "Salt",
        ])
        .price("chicken breast", 3.8)
        .price("jasmine rice", 2.0)
        .build()?;

    for (name, quantities) in &list.items {
        println!("{}: {} ({:.2})", name, quantities.join(", "), list.costs[name]);
    }
    println!("Subtotal: {:.2}", list.summary.subtotal);

    println!("\n=== Custom staples ===");
    let list = ShoppingList::builder()
        .lines(["Jasmine Rice - 150g", "Salt - pinch", "Tofu - 280g"])
        .staples(StapleSet::new(["rice"]))
        .price("tofu", 2.0)
        .build()?;

    println!("{}", serde_json::to_string_pretty(&list)?);
    if !list.summary.unmatched_items.is_empty() {
        println!("No price for: {}", list.summary.unmatched_items.join(", "));
    }

    Ok(())
}
