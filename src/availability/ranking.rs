//! Display ordering for availability reports

use std::cmp::Reverse;

use super::report::AvailabilityReport;

/// Order reports by makeability, best first
///
/// Sorts descending by availability rank, then by percentage available.
/// Reports with equal keys keep their input order (`sort_by_key` is stable).
/// The input slice is left untouched.
pub fn rank<'a>(reports: &[AvailabilityReport<'a>]) -> Vec<AvailabilityReport<'a>> {
    let mut ranked = reports.to_vec();
    ranked.sort_by_key(|r| Reverse((r.availability.rank(), r.percentage_available)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::{analyze, Availability};
    use crate::models::{InventoryItem, Recipe};

    #[test]
    fn test_full_ranks_before_partial() {
        let recipes = vec![
            Recipe::new("Margarita")
                .with_ingredient("Tequila", "2 oz")
                .with_ingredient("Triple sec", "1 oz")
                .with_ingredient("Lime juice", "1 oz")
                .with_ingredient("Salt", "pinch"),
            Recipe::new("Tequila Sour")
                .with_ingredient("Tequila", "2 oz")
                .with_ingredient("Lime juice", "1 oz"),
        ];
        let stock = vec![
            InventoryItem::named("Tequila"),
            InventoryItem::named("Triple sec"),
            InventoryItem::named("Lime juice"),
        ];

        let reports = analyze(&recipes, &stock);
        assert_eq!(reports[0].percentage_available, 75);

        let ranked = rank(&reports);
        assert_eq!(ranked[0].recipe.name, "Tequila Sour");
        assert_eq!(ranked[0].availability, Availability::Full);
        assert_eq!(ranked[1].recipe.name, "Margarita");

        // input untouched
        assert_eq!(reports[0].recipe.name, "Margarita");
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let recipes = vec![
            Recipe::new("First")
                .with_ingredient("Gin", "1 oz")
                .with_ingredient("Vermouth", "1 oz"),
            Recipe::new("Full")
                .with_ingredient("Gin", "1 oz"),
            Recipe::new("Second")
                .with_ingredient("Gin", "1 oz")
                .with_ingredient("Campari", "1 oz"),
            Recipe::new("Missing")
                .with_ingredient("Absinthe", "1 dash"),
            Recipe::new("Third")
                .with_ingredient("Bitters", "1 dash")
                .with_ingredient("Gin", "2 oz"),
        ];
        let stock = vec![InventoryItem::named("Gin")];

        let ranked = rank(&analyze(&recipes, &stock));
        let names: Vec<_> = ranked.iter().map(|r| r.recipe.name.as_str()).collect();
        assert_eq!(names, vec!["Full", "First", "Second", "Third", "Missing"]);
    }

    #[test]
    fn test_higher_percentage_first_within_partial() {
        let recipes = vec![
            Recipe::new("Half")
                .with_ingredient("Gin", "1 oz")
                .with_ingredient("Campari", "1 oz"),
            Recipe::new("Two thirds")
                .with_ingredient("Gin", "1 oz")
                .with_ingredient("Lemon juice", "1 oz")
                .with_ingredient("Egg white", "1"),
        ];
        let stock = vec![InventoryItem::named("Gin"), InventoryItem::named("Lemon juice")];

        let ranked = rank(&analyze(&recipes, &stock));
        assert_eq!(ranked[0].recipe.name, "Two thirds");
        assert_eq!(ranked[0].percentage_available, 67);
        assert_eq!(ranked[1].percentage_available, 50);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&[]).is_empty());
    }
}
