use crate::model::{ParsedIngredient, DEFAULT_QUANTITY};

fn is_separator(c: char) -> bool {
    c == '–' || c == '-'
}

/// Extract the name and quantity from a raw ingredient line.
///
/// `"Chicken Breast – 200g"` becomes `("chicken breast", "200g")`. A line without
/// exactly one dash keeps the whole text as its name and gets [`DEFAULT_QUANTITY`].
pub fn parse_ingredient(raw: &str) -> ParsedIngredient {
    let parts: Vec<&str> = raw.split(is_separator).collect();

    // Compatibility: a hyphenated name such as "Pre-cooked Chicken - 200g" yields
    // three segments and is kept whole with the default quantity. Do not "fix"
    // this to split on the last dash; downstream price tables key on it.
    match parts.as_slice() {
        [name, quantity] => ParsedIngredient::new(name.trim().to_lowercase(), quantity.trim()),
        _ => ParsedIngredient::new(raw.trim().to_lowercase(), DEFAULT_QUANTITY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_en_dash_split() {
        let parsed = parse_ingredient("Chicken Breast – 200g");
        assert_eq!(parsed, ParsedIngredient::new("chicken breast", "200g"));
    }

    #[test]
    fn test_hyphen_split_preserves_quantity_case() {
        let parsed = parse_ingredient("  Greek Yogurt-1 Pot ");
        assert_eq!(parsed.name, "greek yogurt");
        assert_eq!(parsed.quantity, "1 Pot");
    }

    #[test]
    fn test_no_separator_defaults_quantity() {
        let parsed = parse_ingredient("Olive Oil");
        assert_eq!(parsed, ParsedIngredient::new("olive oil", "1 unit"));
    }

    #[test]
    fn test_two_dashes_keep_whole_line() {
        let parsed = parse_ingredient("Pre-cooked Chicken - 200g");
        assert_eq!(
            parsed,
            ParsedIngredient::new("pre-cooked chicken - 200g", "1 unit")
        );
    }

    #[test]
    fn test_adjacent_dashes_are_separate_delimiters() {
        // "--" produces three segments, not two
        let parsed = parse_ingredient("Rice -- 1kg");
        assert_eq!(parsed, ParsedIngredient::new("rice -- 1kg", "1 unit"));
    }

    #[test]
    fn test_trailing_dash_gives_empty_quantity() {
        let parsed = parse_ingredient("Chicken -");
        assert_eq!(parsed, ParsedIngredient::new("chicken", ""));
    }

    #[test]
    fn test_empty_line() {
        let parsed = parse_ingredient("");
        assert_eq!(parsed, ParsedIngredient::new("", "1 unit"));
    }
}
