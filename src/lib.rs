//! Bar Cart Library
//!
//! Recipe availability analysis: which cocktails can be made from what is
//! currently on the shelf.

pub mod availability;
pub mod fixtures;
pub mod models;

pub use availability::{
    analyze, build_report, names_match, normalize_name, rank, summarize, Analysis,
    AnalysisSummary, Availability, AvailabilityReport,
};
pub use models::{IngredientRequirement, InventoryItem, Recipe};
