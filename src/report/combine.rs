//! Loading persisted reports and combining several reports into one.

use super::rollup::sum_all;
use super::types::Root;
use crate::error::ReportError;
use chrono::Utc;
use log::debug;

/// Decode a report previously written as JSON.
///
/// Fails as a whole on malformed input; no partial report is returned.
pub fn load(data: &[u8]) -> Result<Root, ReportError> {
    serde_json::from_slice(data).map_err(ReportError::Deserialization)
}

/// Merge reports into one.
///
/// Resources are concatenated (duplicates kept) and sorted by name. Totals
/// are summed from each report's own totals, so a report with `None` totals
/// contributes nothing. Input warnings are not carried over.
pub fn combine(reports: &[Root]) -> Root {
    let mut combined = Root::empty();

    for report in reports {
        combined.resources.extend(report.resources.iter().cloned());
    }

    // Stable: resources sharing a name keep their relative order
    combined.resources.sort_by(|a, b| a.name.cmp(&b.name));

    combined.total_hourly_cost = sum_all(reports.iter().map(|r| r.total_hourly_cost));
    combined.total_monthly_cost = sum_all(reports.iter().map(|r| r.total_monthly_cost));
    combined.time_generated = Utc::now();

    debug!("Combined {} reports into {} resources", reports.len(), combined.resources.len());

    combined
}
