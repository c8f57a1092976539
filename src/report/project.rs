//! Projection of priced resources into the report shape.

use super::types::{CostComponent, Resource};
use crate::types::{PricedCostComponent, PricedResource};

/// Copy a priced resource, its line items and all nested sub-resources
/// into the report shape.
pub fn project_resource(resource: &PricedResource) -> Resource {
    Resource {
        name: resource.name.clone(),
        hourly_cost: resource.hourly_cost,
        monthly_cost: resource.monthly_cost,
        cost_components: resource.cost_components.iter().map(project_cost_component).collect(),
        sub_resources: resource.sub_resources.iter().map(project_resource).collect(),
    }
}

/// Unit, price and quantities all carry the display multiplier; costs do not change.
fn project_cost_component(component: &PricedCostComponent) -> CostComponent {
    CostComponent {
        name: component.name.clone(),
        unit: component.unit_with_multiplier(),
        hourly_quantity: component.unit_multiplier_hourly_quantity(),
        monthly_quantity: component.unit_multiplier_monthly_quantity(),
        price: component.unit_multiplier_price(),
        hourly_cost: component.hourly_cost,
        monthly_cost: component.monthly_cost,
    }
}
