//! Availability reports
//!
//! Builds one report per recipe by checking each ingredient line for presence
//! in the inventory. Presence only: an item is never "used up" by a match, and
//! remaining volume is not compared against the recipe's measure.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::matcher::normalize_name;
use super::summary::summarize;
use crate::models::{InventoryItem, Recipe};

/// How much of a recipe can be made from the current inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// Every ingredient is stocked
    Full,
    /// Some, but not all, ingredients are stocked
    Partial,
    /// Nothing is stocked, or the recipe lists no ingredients
    None,
}

impl Availability {
    /// Classify from missing and total ingredient counts
    ///
    /// A recipe without ingredients is never `Full`.
    pub fn classify(missing_count: usize, total_ingredients: usize) -> Self {
        if total_ingredients == 0 || missing_count == total_ingredients {
            Availability::None
        } else if missing_count == 0 {
            Availability::Full
        } else {
            Availability::Partial
        }
    }

    /// Makeability rank, higher sorts first
    pub fn rank(&self) -> u8 {
        match self {
            Availability::Full => 3,
            Availability::Partial => 2,
            Availability::None => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Full => "full",
            Availability::Partial => "partial",
            Availability::None => "none",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Availability of a single recipe
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityReport<'a> {
    pub recipe: &'a Recipe,
    pub availability: Availability,
    pub missing_ingredients: Vec<String>,
    pub available_ingredients: Vec<String>,
    pub missing_count: usize,
    pub total_ingredients: usize,
    pub percentage_available: u8,
}

/// Percentage of ingredients available, rounded half up
///
/// Zero when there are no ingredients. A recipe with anything missing never
/// reports 100, so the value is capped at 99 when rounding would reach it.
pub fn percentage_available(available: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percentage = ((available as f64 / total as f64) * 100.0).round() as u8;
    if available < total {
        percentage.min(99)
    } else {
        percentage
    }
}

/// Normalized names of every named inventory item
fn stocked_names(inventory: &[InventoryItem]) -> HashSet<String> {
    inventory
        .iter()
        .filter_map(|item| normalize_name(item.name.as_deref()))
        .collect()
}

/// Build the availability report for one recipe
pub fn build_report<'a>(recipe: &'a Recipe, inventory: &[InventoryItem]) -> AvailabilityReport<'a> {
    report_against(recipe, &stocked_names(inventory))
}

fn report_against<'a>(recipe: &'a Recipe, stocked: &HashSet<String>) -> AvailabilityReport<'a> {
    let mut missing_ingredients = Vec::new();
    let mut available_ingredients = Vec::new();

    for ingredient in &recipe.ingredients {
        let name = ingredient.name.as_deref();
        let is_stocked = match normalize_name(name) {
            Some(normalized) => stocked.contains(&normalized),
            None => {
                tracing::debug!(recipe = %recipe.name, "Ingredient line without a name");
                false
            }
        };

        let label = name.unwrap_or_default().to_string();
        if is_stocked {
            available_ingredients.push(label);
        } else {
            missing_ingredients.push(label);
        }
    }

    let total_ingredients = recipe.ingredients.len();
    let missing_count = missing_ingredients.len();

    tracing::trace!(
        recipe = %recipe.name,
        missing = missing_count,
        total = total_ingredients,
        "Built availability report"
    );

    AvailabilityReport {
        recipe,
        availability: Availability::classify(missing_count, total_ingredients),
        percentage_available: percentage_available(available_ingredients.len(), total_ingredients),
        missing_ingredients,
        available_ingredients,
        missing_count,
        total_ingredients,
    }
}

/// Build reports for every recipe, in input order
pub fn analyze<'a>(recipes: &'a [Recipe], inventory: &[InventoryItem]) -> Vec<AvailabilityReport<'a>> {
    let unnamed = inventory.iter().filter(|item| item.name.is_none()).count();
    if unnamed > 0 {
        tracing::debug!(unnamed, "Inventory items without a name will not match any ingredient");
    }

    let stocked = stocked_names(inventory);
    let reports: Vec<AvailabilityReport<'a>> = recipes
        .par_iter()
        .map(|recipe| report_against(recipe, &stocked))
        .collect();

    if tracing::enabled!(tracing::Level::DEBUG) {
        let summary = summarize(&reports);
        tracing::debug!(
            recipes = recipes.len(),
            inventory = inventory.len(),
            full = summary.fully_makeable,
            partial = summary.partially_makeable,
            none = summary.not_makeable,
            "Analyzed recipe availability"
        );
    }

    reports
}
