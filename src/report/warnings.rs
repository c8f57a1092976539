//! Unsupported resource warning.
//!
//! Resource types without pricing rules are reported in a single advisory
//! message. Types that no provider recognizes at all are left out of the
//! message even though they are counted as unsupported.

use crate::providers::ProviderSupport;
use crate::summary::generate_resource_summary;
use crate::types::PricedResource;

const SUPPORTED_RESOURCES_URL: &str = "https://www.infracost.io/docs/supported_resources";

/// Build the unsupported resource message, or an empty string if every
/// resource could be estimated.
///
/// # Arguments
/// * `resources` - The full resource set, skipped resources included
/// * `providers` - Provider recognition for resource types
/// * `show_details` - Itemize the unsupported types instead of pointing at `--show-skipped`
pub fn unsupported_resources_message<P>(resources: &[PricedResource], providers: &P, show_details: bool) -> String
where
    P: ProviderSupport + ?Sized,
{
    let summary = generate_resource_summary(resources);
    if summary.total_unsupported == 0 {
        return String::new();
    }

    let known: Vec<(&String, &usize)> = summary
        .unsupported_counts
        .iter()
        .filter(|(resource_type, _)| providers.has_supported_provider(resource_type))
        .collect();

    let mut message = if known.len() == 1 {
        format!(
            "1 resource type couldn't be estimated as Infracost doesn't support it yet ({})",
            SUPPORTED_RESOURCES_URL
        )
    } else {
        format!(
            "{} resource types couldn't be estimated as Infracost doesn't support them yet ({})",
            known.len(),
            SUPPORTED_RESOURCES_URL
        )
    };

    if show_details {
        message.push_str(".\n");
    } else {
        message.push_str(", re-run with --show-skipped to see the list.\n");
    }

    message.push_str(
        "We're continually adding new resources, please email hello@infracost.io if you'd like us to prioritize your list.",
    );

    if show_details {
        for (resource_type, count) in known {
            message.push_str(&format!("\n{} x {}", count, resource_type));
        }
    }

    message
}
