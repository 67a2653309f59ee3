use log::{debug, warn};
use serde_json::Value;
use std::path::Path;

use crate::error::BasketError;
use crate::model::{CostEstimate, CostSummary, IngredientGroup, PriceLookup};

/// Round to the nearest cent, ties to even, judged on the exact binary value.
fn round_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    let mut rounded = scaled.round_ties_even();

    // `scaled` may have landed on a half-cent only through the multiplication
    // error; the fused residual tells which side the exact product lies on.
    if (scaled - scaled.trunc()).abs() == 0.5 {
        let residual = value.mul_add(100.0, -scaled);
        if residual > 0.0 {
            rounded = scaled.ceil();
        } else if residual < 0.0 {
            rounded = scaled.floor();
        }
    }

    rounded / 100.0
}

/// Estimate the cost of each grouped ingredient.
///
/// The multiplier is the number of lines that named the ingredient; quantity
/// text such as "200g" is never parsed. Missing prices count as zero.
pub fn estimate_costs(groups: &IngredientGroup, prices: &PriceLookup) -> CostEstimate {
    groups
        .iter()
        .map(|(name, quantities)| {
            let price = prices.get(&name.to_lowercase()).copied().unwrap_or(0.0);
            let total_units = quantities.len() as f64;
            (name.clone(), round_cents(price * total_units))
        })
        .collect()
}

/// Basket totals plus the ingredients the price lookup could not match
pub fn summarize_costs(groups: &IngredientGroup, prices: &PriceLookup) -> CostSummary {
    let costs = estimate_costs(groups, prices);
    let subtotal = round_cents(costs.values().sum());

    // BTreeMap keys are already sorted
    let unmatched_items = groups
        .keys()
        .filter(|name| !prices.contains_key(&name.to_lowercase()))
        .cloned()
        .collect();

    CostSummary {
        subtotal,
        item_count: groups.len(),
        unmatched_items,
    }
}

/// Parse a price table from a JSON object mapping ingredient name to unit price.
///
/// Keys are lowercased. Entries that are not numbers are skipped with a warning.
pub fn parse_price_lookup(json: &str) -> Result<PriceLookup, BasketError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| BasketError::PriceTableError(e.to_string()))?;
    let table = value.as_object().ok_or_else(|| {
        BasketError::PriceTableError("expected a JSON object of name to price".to_string())
    })?;

    let mut prices = PriceLookup::with_capacity(table.len());
    for (name, price) in table {
        match price.as_f64() {
            Some(price) => {
                prices.insert(name.trim().to_lowercase(), price);
            }
            None => warn!("Ignoring non-numeric price for '{}': {}", name, price),
        }
    }
    debug!("Loaded {} prices", prices.len());

    Ok(prices)
}

/// Read and parse a JSON price table file
pub async fn load_price_lookup(path: impl AsRef<Path>) -> Result<PriceLookup, BasketError> {
    let contents = tokio::fs::read_to_string(path).await?;
    parse_price_lookup(&contents)
}
