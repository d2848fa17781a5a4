//! Recipe availability analysis
//!
//! Matches recipe ingredient lines against the bar inventory and classifies
//! each recipe as fully, partially, or not makeable.

pub mod matcher;
pub mod ranking;
pub mod report;
pub mod summary;

pub use matcher::{names_match, normalize_name};
pub use ranking::rank;
pub use report::{analyze, build_report, Availability, AvailabilityReport};
pub use summary::{summarize, AnalysisSummary};

use serde::Serialize;

use crate::models::{InventoryItem, Recipe};

/// Reports for one analysis run together with their summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis<'a> {
    pub reports: Vec<AvailabilityReport<'a>>,
    pub summary: AnalysisSummary,
}

impl<'a> Analysis<'a> {
    /// Analyze every recipe against the inventory
    pub fn run(recipes: &'a [Recipe], inventory: &[InventoryItem]) -> Self {
        let reports = analyze(recipes, inventory);
        let summary = summarize(&reports);
        Self { reports, summary }
    }

    /// Reports in display order
    pub fn ranked(&self) -> Vec<AvailabilityReport<'a>> {
        rank(&self.reports)
    }
}
