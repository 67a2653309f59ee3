use log::debug;

use super::parser::parse_ingredient;
use super::staples::StapleSet;
use crate::model::IngredientGroup;

/// Parse and group raw ingredient lines, dropping the default pantry staples.
///
/// Quantities for the same name are kept in the order they were encountered.
pub fn extract_ingredients<I, S>(raw_lines: I) -> IngredientGroup
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extract_ingredients_with(raw_lines, &StapleSet::default())
}

/// Same as [`extract_ingredients`] with a caller-supplied staple set
pub fn extract_ingredients_with<I, S>(raw_lines: I, staples: &StapleSet) -> IngredientGroup
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut grouped = IngredientGroup::new();

    for line in raw_lines {
        let parsed = parse_ingredient(line.as_ref());
        if staples.is_staple(&parsed.name) {
            debug!("Skipping pantry staple '{}'", parsed.name);
            continue;
        }
        grouped.entry(parsed.name).or_default().push(parsed.quantity);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_and_drops_staples() {
        let grouped = extract_ingredients(["Chicken – 200g", "Salt – 1tsp", "Chicken – 100g"]);

        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped["chicken"], vec!["200g", "100g"]);
        assert!(!grouped.contains_key("salt"));
    }

    #[test]
    fn test_empty_input() {
        let grouped = extract_ingredients(Vec::<String>::new());
        assert!(grouped.is_empty());
    }

    #[test]
    fn test_default_quantity_is_grouped() {
        let grouped = extract_ingredients(["Rice", "rice - 500g", "RICE"]);
        assert_eq!(grouped["rice"], vec!["1 unit", "500g", "1 unit"]);
    }

    #[test]
    fn test_repeated_calls_are_equal() {
        let lines = vec![
            "Tofu – 280g".to_string(),
            "Spinach - 1 bag".to_string(),
            "Butter - 20g".to_string(),
            "Tofu - 100g".to_string(),
        ];
        assert_eq!(extract_ingredients(&lines), extract_ingredients(&lines));
    }

    #[test]
    fn test_custom_staples() {
        let staples = StapleSet::new(["rice"]);
        let grouped = extract_ingredients_with(["Rice - 1kg", "Salt - pinch"], &staples);

        assert!(!grouped.contains_key("rice"));
        assert_eq!(grouped["salt"], vec!["pinch"]);
    }
}
