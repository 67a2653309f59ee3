use serde::{Deserialize, Serialize};

/// Pantry staples assumed to always be on hand, excluded from shopping lists.
///
/// Matching is a plain substring test, so "garlic bread" counts as garlic and
/// "boil" counts as oil.
pub const DEFAULT_STAPLES: &[&str] = &[
    "salt",
    "pepper",
    "oil",
    "olive oil",
    "vegetable oil",
    "butter",
    "garlic",
    "honey",
    "mustard",
    "soy sauce",
    "vinegar",
    "mayonnaise",
    "sugar",
    "spices",
    "herbs",
    "ketchup",
    "flour",
    "baking powder",
    "seasoning",
    "chilli flakes",
    "coconut milk",
    "lemon juice",
    "maple syrup",
];

/// Returns true if `name` contains any of the [`DEFAULT_STAPLES`].
pub fn is_staple(name: &str) -> bool {
    let name = name.to_lowercase();
    DEFAULT_STAPLES.iter().any(|staple| name.contains(staple))
}

/// Ordered set of lowercase substrings identifying pantry staples
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StapleSet {
    entries: Vec<String>,
}

impl StapleSet {
    /// Build a set from custom entries. Entries are trimmed and lowercased;
    /// blank entries are skipped since they would match every name.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_lowercase())
            .filter(|entry| !entry.is_empty())
            .collect();
        StapleSet { entries }
    }

    /// A set that treats nothing as a staple
    pub fn empty() -> Self {
        StapleSet {
            entries: Vec::new(),
        }
    }

    pub fn is_staple(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.entries.iter().any(|staple| name.contains(staple.as_str()))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StapleSet {
    fn default() -> Self {
        StapleSet::new(DEFAULT_STAPLES)
    }
}
