/// Resource summary
///
/// Counts priced, unsupported and free resources per resource type so the
/// report can warn about what could not be estimated.
use crate::types::PricedResource;
use std::collections::BTreeMap;

/// Per-type resource counts for one resource set.
///
/// Maps are keyed by resource type and ordered by type name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSummary {
    pub supported_counts: BTreeMap<String, usize>,
    pub unsupported_counts: BTreeMap<String, usize>,
    pub total_supported: usize,
    pub total_unsupported: usize,
    pub total_no_price: usize,
}

/// Summarize top-level resources.
///
/// Free resources only count toward `total_no_price`. Other skipped resources
/// are unsupported; everything else is supported.
pub fn generate_resource_summary(resources: &[PricedResource]) -> ResourceSummary {
    let mut summary = ResourceSummary::default();

    for resource in resources {
        if resource.no_price {
            summary.total_no_price += 1;
        } else if resource.is_skipped {
            summary.total_unsupported += 1;
            *summary.unsupported_counts.entry(resource.resource_type.clone()).or_insert(0) += 1;
        } else {
            summary.total_supported += 1;
            *summary.supported_counts.entry(resource.resource_type.clone()).or_insert(0) += 1;
        }
    }

    summary
}
