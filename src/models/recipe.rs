//! Recipe model
//!
//! Represents a drink recipe and its ordered ingredient lines.

use serde::{Deserialize, Serialize};

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRequirement {
    #[serde(default)]
    pub name: Option<String>,
    /// Free-text quantity, e.g. "2 oz" or "a dash". Never parsed.
    #[serde(default)]
    pub measure: String,
}

impl IngredientRequirement {
    pub fn new(name: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            measure: measure.into(),
        }
    }
}

/// A named drink formula
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Display image reference
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<IngredientRequirement>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper to append an ingredient line
    pub fn with_ingredient(mut self, name: impl Into<String>, measure: impl Into<String>) -> Self {
        self.ingredients.push(IngredientRequirement::new(name, measure));
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Number of ingredient lines
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }
}
