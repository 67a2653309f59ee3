//! Ingredient line processing: parse, filter pantry staples, group and price.

mod grouper;
mod parser;
mod pricing;
mod staples;

pub use grouper::{extract_ingredients, extract_ingredients_with};
pub use parser::parse_ingredient;
pub use pricing::{estimate_costs, load_price_lookup, parse_price_lookup, summarize_costs};
pub use staples::{is_staple, StapleSet, DEFAULT_STAPLES};
