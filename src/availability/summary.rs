//! Aggregate counts over a set of availability reports

use serde::{Deserialize, Serialize};

use super::report::{Availability, AvailabilityReport};

/// Number of recipes in each availability class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub fully_makeable: usize,
    pub partially_makeable: usize,
    pub not_makeable: usize,
}

impl AnalysisSummary {
    pub fn total(&self) -> usize {
        self.fully_makeable + self.partially_makeable + self.not_makeable
    }
}

/// Count reports by availability
pub fn summarize(reports: &[AvailabilityReport<'_>]) -> AnalysisSummary {
    reports
        .iter()
        .fold(AnalysisSummary::default(), |mut summary, report| {
            match report.availability {
                Availability::Full => summary.fully_makeable += 1,
                Availability::Partial => summary.partially_makeable += 1,
                Availability::None => summary.not_makeable += 1,
            }
            summary
        })
}
