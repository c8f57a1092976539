//! Report generation module - Data transformations and business logic.
//!
//! This module handles:
//! - Projecting priced resources into the persisted report shape
//! - Rolling up optional hourly/monthly costs
//! - Summarizing unsupported resources as a warning
//! - Loading, combining and exporting reports
//! - Formatting costs and rendering the console table
//!
//! # Module Organization
//!
//! - `types` - Persisted report types (Root, Resource, CostComponent)
//! - `rollup` - Nil-safe decimal sums
//! - `project` - Priced resource → report resource projection
//! - `warnings` - Unsupported resource message
//! - `build` - Report builder for one priced resource set
//! - `combine` - Report loader and combiner
//! - `export` - JSON export and file loading
//! - `format` - Cost and quantity formatting
//! - `table` - Console table output

mod build;
mod combine;
mod export;
mod format;
mod project;
mod rollup;
mod table;
mod types;
mod warnings;

// Re-export types
pub use types::{CostComponent, Resource, Root};

// Re-export core operations
pub use build::{BuildOptions, to_output_format};
pub use combine::{combine, load};
pub use project::project_resource;
pub use rollup::{CostTotals, sum_all, sum_optional};
pub use warnings::unsupported_resources_message;

// Re-export export functions
pub use export::{export_json_report, load_priced_resources_file, load_report_file};

// Re-export formatting and table functions
pub use format::{format_amount, format_cost, format_quantity};
pub use table::{TableRow, format_report_table, print_report_table, report_rows, write_report_table};
