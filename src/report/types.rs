//! Report type definitions for the persisted output document.
//!
//! Field names are part of the JSON format and must not change: reports
//! written by one run are loaded back by later runs and combined.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level report document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Root {
    pub resources: Vec<Resource>,
    /// None when no resource reported an hourly cost
    pub total_hourly_cost: Option<Decimal>,
    /// None when no resource reported a monthly cost
    pub total_monthly_cost: Option<Decimal>,
    pub time_generated: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Root {
    /// An empty report generated now.
    pub fn empty() -> Self {
        Root {
            resources: Vec::new(),
            total_hourly_cost: None,
            total_monthly_cost: None,
            time_generated: Utc::now(),
            warnings: Vec::new(),
        }
    }
}

/// A priced resource as it appears in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub name: String,
    pub hourly_cost: Option<Decimal>,
    pub monthly_cost: Option<Decimal>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub cost_components: Vec<CostComponent>,
    #[serde(
        rename = "subresources",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sub_resources: Vec<Resource>,
}

/// One line item of a resource.
///
/// Unit, price and quantities are all expressed with the same display
/// multiplier applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostComponent {
    pub name: String,
    pub unit: String,
    pub hourly_quantity: Option<Decimal>,
    pub monthly_quantity: Option<Decimal>,
    pub price: Decimal,
    pub hourly_cost: Option<Decimal>,
    pub monthly_cost: Option<Decimal>,
}

// Older reports write `null` for empty lists.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
