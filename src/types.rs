/// Priced resource data structures
///
/// This module defines the resource graph handed over by the pricing stage.
/// Costs are already computed when these values reach the report layer;
/// nothing here looks prices up.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A resource as priced by the pricing stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedResource {
    /// Address of the resource, e.g. "aws_instance.web"
    pub name: String,

    /// Resource type, e.g. "aws_instance" (empty for synthetic sub-resources)
    #[serde(default)]
    pub resource_type: String,

    /// None = the resource could not be priced, distinct from a zero cost
    #[serde(default)]
    pub hourly_cost: Option<Decimal>,

    #[serde(default)]
    pub monthly_cost: Option<Decimal>,

    /// Line items in definition order
    #[serde(default)]
    pub cost_components: Vec<PricedCostComponent>,

    /// Nested resources, e.g. autoscaling group → launch configuration
    #[serde(default)]
    pub sub_resources: Vec<PricedResource>,

    /// Excluded from costing (unsupported type or free resource)
    #[serde(default)]
    pub is_skipped: bool,

    /// Known to be free; never reported as unsupported
    #[serde(default)]
    pub no_price: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_message: Option<String>,
}

impl PricedResource {
    /// Create an unpriced resource with no line items
    pub fn new(name: &str, resource_type: &str) -> Self {
        Self {
            name: name.to_string(),
            resource_type: resource_type.to_string(),
            hourly_cost: None,
            monthly_cost: None,
            cost_components: Vec::new(),
            sub_resources: Vec::new(),
            is_skipped: false,
            no_price: false,
            skip_message: None,
        }
    }

    /// Set the top-level costs (already folded over components and sub-resources)
    pub fn with_costs(mut self, hourly: Option<Decimal>, monthly: Option<Decimal>) -> Self {
        self.hourly_cost = hourly;
        self.monthly_cost = monthly;
        self
    }

    pub fn with_component(mut self, component: PricedCostComponent) -> Self {
        self.cost_components.push(component);
        self
    }

    pub fn with_sub_resource(mut self, sub_resource: PricedResource) -> Self {
        self.sub_resources.push(sub_resource);
        self
    }

    /// Mark as skipped because no pricing rule exists for its type
    pub fn unsupported(mut self) -> Self {
        self.is_skipped = true;
        self.skip_message = Some("This resource is not currently supported".to_string());
        self
    }

    /// Mark as skipped because the resource is free
    pub fn free(mut self) -> Self {
        self.is_skipped = true;
        self.no_price = true;
        self.skip_message = Some("Free resource.".to_string());
        self
    }
}

/// One priced line item of a resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedCostComponent {
    pub name: String,

    /// Base unit, without multiplier ("GB", "hours")
    pub unit: String,

    /// Display scale: prices are shown per `unit_multiplier` units
    #[serde(default = "default_unit_multiplier")]
    pub unit_multiplier: u32,

    /// Price per base unit
    pub price: Decimal,

    #[serde(default)]
    pub hourly_quantity: Option<Decimal>,

    #[serde(default)]
    pub monthly_quantity: Option<Decimal>,

    #[serde(default)]
    pub hourly_cost: Option<Decimal>,

    #[serde(default)]
    pub monthly_cost: Option<Decimal>,
}

fn default_unit_multiplier() -> u32 {
    1
}

impl PricedCostComponent {
    /// Create a line item with no quantities (and therefore no costs)
    pub fn new(name: &str, unit: &str, price: Decimal) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            unit_multiplier: 1,
            price,
            hourly_quantity: None,
            monthly_quantity: None,
            hourly_cost: None,
            monthly_cost: None,
        }
    }

    pub fn with_unit_multiplier(mut self, multiplier: u32) -> Self {
        self.unit_multiplier = multiplier;
        self
    }

    /// Set the hourly quantity; the hourly cost follows as price × quantity
    pub fn with_hourly_quantity(mut self, quantity: Decimal) -> Self {
        self.hourly_quantity = Some(quantity);
        self.hourly_cost = Some(self.price.saturating_mul(quantity));
        self
    }

    /// Set the monthly quantity; the monthly cost follows as price × quantity
    pub fn with_monthly_quantity(mut self, quantity: Decimal) -> Self {
        self.monthly_quantity = Some(quantity);
        self.monthly_cost = Some(self.price.saturating_mul(quantity));
        self
    }

    fn multiplier(&self) -> Decimal {
        Decimal::from(self.unit_multiplier.max(1))
    }

    /// Unit label including the multiplier, e.g. "100 GB"
    pub fn unit_with_multiplier(&self) -> String {
        if self.unit_multiplier <= 1 { self.unit.clone() } else { format!("{} {}", self.unit_multiplier, self.unit) }
    }

    /// Price per `unit_multiplier` units, clamped to the decimal range
    pub fn unit_multiplier_price(&self) -> Decimal {
        self.price.saturating_mul(self.multiplier())
    }

    pub fn unit_multiplier_hourly_quantity(&self) -> Option<Decimal> {
        self.hourly_quantity.map(|q| q / self.multiplier())
    }

    pub fn unit_multiplier_monthly_quantity(&self) -> Option<Decimal> {
        self.monthly_quantity.map(|q| q / self.multiplier())
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
