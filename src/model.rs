use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Quantity recorded for a line that carries no explicit amount
pub const DEFAULT_QUANTITY: &str = "1 unit";

/// An ingredient line split into its normalized name and free-form quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Trimmed, lowercased ingredient name (e.g. "chicken breast")
    pub name: String,
    /// Trimmed quantity text with case preserved (e.g. "200g")
    pub quantity: String,
}

impl ParsedIngredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        ParsedIngredient {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

/// Ingredient name to every quantity seen for it, in input order
pub type IngredientGroup = BTreeMap<String, Vec<String>>;

/// Lowercase ingredient name to unit price
pub type PriceLookup = HashMap<String, f64>;

/// Ingredient name to estimated total cost
pub type CostEstimate = BTreeMap<String, f64>;

/// Totals across a priced shopping list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CostSummary {
    pub subtotal: f64,
    pub item_count: usize,
    /// Ingredients with no entry in the price lookup, sorted by name
    pub unmatched_items: Vec<String>,
}

/// Grouped ingredients together with their priced view
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShoppingList {
    pub items: IngredientGroup,
    pub costs: CostEstimate,
    pub summary: CostSummary,
}
