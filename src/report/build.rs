//! Report builder - turns one priced resource set into a report.

use super::project::project_resource;
use super::rollup::CostTotals;
use super::types::Root;
use super::warnings::unsupported_resources_message;
use crate::providers::ProviderSupport;
use crate::types::PricedResource;
use chrono::Utc;
use log::debug;

/// Options for building a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Itemize unsupported resource types in the warning
    pub show_skipped: bool,
}

/// Build a report from the resources priced in one run.
///
/// Skipped resources are left out of the report and its totals but still
/// feed the unsupported resource warning. Top-level resource costs already
/// include their sub-resources, so totals only sum top-level costs.
pub fn to_output_format<P>(resources: &[PricedResource], providers: &P, options: &BuildOptions) -> Root
where
    P: ProviderSupport + ?Sized,
{
    let mut projected = Vec::with_capacity(resources.len());
    let mut totals = CostTotals::default();

    for resource in resources {
        if resource.is_skipped {
            continue;
        }
        projected.push(project_resource(resource));
        totals.add(resource.hourly_cost, resource.monthly_cost);
    }

    debug!("Built report with {} resources ({} skipped)", projected.len(), resources.len() - projected.len());

    let mut root = Root {
        resources: projected,
        total_hourly_cost: totals.hourly,
        total_monthly_cost: totals.monthly,
        time_generated: Utc::now(),
        warnings: Vec::new(),
    };

    let message = unsupported_resources_message(resources, providers, options.show_skipped);
    if !message.is_empty() {
        root.warnings.push(message);
    }

    root
}
