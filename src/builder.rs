use crate::ingredients::{estimate_costs, extract_ingredients_with, summarize_costs, StapleSet};
use crate::model::{PriceLookup, ShoppingList};
use crate::BasketError;

/// Builder for turning raw ingredient lines into a priced shopping list
#[derive(Debug, Default)]
pub struct ShoppingListBuilder {
    lines: Vec<String>,
    staples: Option<StapleSet>,
    prices: PriceLookup,
}

impl ShoppingListBuilder {
    /// Add a single raw ingredient line
    ///
    /// # Example
    /// ```
    /// use meal_basket::ShoppingList;
    ///
    /// let builder = ShoppingList::builder()
    ///     .line("Chicken Breast – 200g");
    /// ```
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Add several raw ingredient lines, keeping their order
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Replace the default pantry staples
    ///
    /// # Example
    /// ```
    /// use meal_basket::{ShoppingList, StapleSet};
    ///
    /// let builder = ShoppingList::builder()
    ///     .staples(StapleSet::new(["salt", "rice"]));
    /// ```
    pub fn staples(mut self, staples: StapleSet) -> Self {
        self.staples = Some(staples);
        self
    }

    /// Use the given price table, replacing any prices set so far
    pub fn prices(mut self, prices: PriceLookup) -> Self {
        self.prices = prices;
        self
    }

    /// Set a single unit price; the name is lowercased
    pub fn price(mut self, name: impl AsRef<str>, unit_price: f64) -> Self {
        self.prices.insert(name.as_ref().to_lowercase(), unit_price);
        self
    }

    /// Group the lines, drop staples and price what is left
    ///
    /// # Errors
    /// Returns `BasketError::BuilderError` if no ingredient lines were added.
    ///
    /// # Example
    /// ```
    /// use meal_basket::ShoppingList;
    ///
    /// let list = ShoppingList::builder()
    ///     .lines(["Chicken – 200g", "Salt – 1tsp", "Chicken – 100g"])
    ///     .price("chicken", 2.5)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(list.costs["chicken"], 5.0);
    /// ```
    pub fn build(self) -> Result<ShoppingList, BasketError> {
        if self.lines.is_empty() {
            return Err(BasketError::BuilderError(
                "No ingredient lines specified. Use .line() or .lines()".to_string(),
            ));
        }

        let staples = self.staples.unwrap_or_default();
        let items = extract_ingredients_with(&self.lines, &staples);
        let costs = estimate_costs(&items, &self.prices);
        let summary = summarize_costs(&items, &self.prices);

        Ok(ShoppingList {
            items,
            costs,
            summary,
        })
    }
}

impl ShoppingList {
    /// Creates a new builder for a shopping list
    pub fn builder() -> ShoppingListBuilder {
        ShoppingListBuilder::default()
    }
}
