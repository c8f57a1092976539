//! Console table output for reports.
//!
//! Resources are listed with their cost components and sub-resources as a
//! tree below them, followed by the overall total.

use super::format::{format_amount, format_cost, format_quantity};
use super::types::{CostComponent, Resource, Root};
use crate::console_format::{self, COLUMNS, TableWidths, TableWriter};
use std::io::{self, Write};
use term::color::Color;

const RESOURCE_COLOR: Color = term::color::BRIGHT_WHITE;
const TOTAL_COLOR: Color = term::color::BRIGHT_GREEN;

/// A single table row before layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: [String; COLUMNS],
    pub color: Option<Color>,
}

impl TableRow {
    fn cells(&self) -> [&str; COLUMNS] {
        [
            self.cells[0].as_str(),
            self.cells[1].as_str(),
            self.cells[2].as_str(),
            self.cells[3].as_str(),
            self.cells[4].as_str(),
            self.cells[5].as_str(),
        ]
    }
}

/// Flatten a report into table rows, one per resource, component and sub-resource.
pub fn report_rows(root: &Root) -> Vec<TableRow> {
    let mut rows = Vec::new();
    for resource in &root.resources {
        rows.push(resource_row(resource.name.clone(), resource, Some(RESOURCE_COLOR)));
        push_children(&mut rows, resource, "");
    }
    rows
}

fn resource_row(label: String, resource: &Resource, color: Option<Color>) -> TableRow {
    TableRow {
        cells: [
            label,
            String::new(),
            String::new(),
            String::new(),
            format_cost(resource.hourly_cost),
            format_cost(resource.monthly_cost),
        ],
        color,
    }
}

fn component_row(label: String, component: &CostComponent) -> TableRow {
    TableRow {
        cells: [
            label,
            format_quantity(component.monthly_quantity),
            component.unit.clone(),
            format_amount(component.price),
            format_cost(component.hourly_cost),
            format_cost(component.monthly_cost),
        ],
        color: None,
    }
}

/// Children are the cost components followed by the sub-resources.
fn push_children(rows: &mut Vec<TableRow>, resource: &Resource, indent: &str) {
    let total = resource.cost_components.len() + resource.sub_resources.len();
    let mut index = 0;

    for component in &resource.cost_components {
        index += 1;
        let branch = if index == total { "└─" } else { "├─" };
        rows.push(component_row(format!("{}{} {}", indent, branch, component.name), component));
    }

    for sub_resource in &resource.sub_resources {
        index += 1;
        let last = index == total;
        let branch = if last { "└─" } else { "├─" };
        rows.push(resource_row(format!("{}{} {}", indent, branch, sub_resource.name), sub_resource, None));

        let child_indent = format!("{}{}", indent, if last { "   " } else { "│  " });
        push_children(rows, sub_resource, &child_indent);
    }
}

fn total_row(root: &Root) -> TableRow {
    TableRow {
        cells: [
            "OVERALL TOTAL".to_string(),
            String::new(),
            String::new(),
            String::new(),
            format_cost(root.total_hourly_cost),
            format_cost(root.total_monthly_cost),
        ],
        color: Some(TOTAL_COLOR),
    }
}

/// Write the full report table.
pub fn write_report_table<W: Write>(writer: W, root: &Root, widths: TableWidths, use_colors: bool) -> io::Result<W> {
    let mut table = TableWriter::new(writer, widths, use_colors);

    table.write_table_header()?;
    for row in report_rows(root) {
        table.write_row(row.cells(), row.color)?;
    }
    if !root.resources.is_empty() {
        table.write_separator_line()?;
    }
    let total = total_row(root);
    table.write_row(total.cells(), total.color)?;
    table.write_table_footer()?;

    Ok(table.into_inner())
}

/// Format the report table as a string (no colors).
pub fn format_report_table(root: &Root, widths: TableWidths) -> String {
    match write_report_table(Vec::new(), root, widths, false) {
        Ok(buffer) => String::from_utf8_lossy(&buffer).into_owned(),
        Err(_) => String::new(),
    }
}

/// Print the report table to stdout.
pub fn print_report_table(root: &Root, use_colors: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let handle = stdout.lock();
    write_report_table(handle, root, console_format::get_widths(), use_colors)?.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn component(name: &str, monthly_quantity: &str, unit: &str, price: &str) -> CostComponent {
        let quantity = dec(monthly_quantity);
        let price = dec(price);
        CostComponent {
            name: name.to_string(),
            unit: unit.to_string(),
            hourly_quantity: None,
            monthly_quantity: Some(quantity),
            price,
            hourly_cost: None,
            monthly_cost: Some(price * quantity),
        }
    }

    fn sample_report() -> Root {
        Root {
            resources: vec![
                Resource {
                    name: "aws_instance.web".to_string(),
                    hourly_cost: Some(dec("0.0416")),
                    monthly_cost: Some(dec("31.168")),
                    cost_components: vec![CostComponent {
                        name: "Instance usage".to_string(),
                        unit: "hours".to_string(),
                        hourly_quantity: Some(dec("1")),
                        monthly_quantity: Some(dec("730")),
                        price: dec("0.0416"),
                        hourly_cost: Some(dec("0.0416")),
                        monthly_cost: Some(dec("30.368")),
                    }],
                    sub_resources: vec![Resource {
                        name: "root_block_device".to_string(),
                        hourly_cost: None,
                        monthly_cost: Some(dec("0.8")),
                        cost_components: vec![component("Storage", "8", "GB-months", "0.1")],
                        sub_resources: vec![],
                    }],
                },
                Resource {
                    name: "aws_lambda_function.hello".to_string(),
                    hourly_cost: None,
                    monthly_cost: None,
                    cost_components: vec![],
                    sub_resources: vec![],
                },
            ],
            total_hourly_cost: Some(dec("0.0416")),
            total_monthly_cost: Some(dec("31.168")),
            time_generated: Utc::now(),
            warnings: vec![],
        }
    }

    #[test]
    fn test_report_rows_tree() {
        let rows = report_rows(&sample_report());
        let labels: Vec<&str> = rows.iter().map(|r| r.cells[0].as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "aws_instance.web",
                "├─ Instance usage",
                "└─ root_block_device",
                "   └─ Storage",
                "aws_lambda_function.hello",
            ]
        );
    }

    #[test]
    fn test_report_rows_cells() {
        let rows = report_rows(&sample_report());

        assert_eq!(rows[0].cells[4], "0.0416");
        assert_eq!(rows[0].cells[5], "31.168");
        assert_eq!(rows[0].color, Some(RESOURCE_COLOR));

        assert_eq!(rows[1].cells[1], "730.0000");
        assert_eq!(rows[1].cells[2], "hours");
        assert_eq!(rows[1].cells[3], "0.0416");
        assert_eq!(rows[1].cells[5], "30.368");

        assert_eq!(rows[2].cells[4], "-");
        assert_eq!(rows[3].cells[1], "8.0000");
        assert_eq!(rows[4].cells[4], "-");
        assert_eq!(rows[4].cells[5], "-");
    }

    #[test]
    fn test_nested_indent_continues_branch() {
        let mut root = sample_report();
        // A component after the sub-resource turns the sub-resource into a middle child
        root.resources[0].sub_resources.push(Resource {
            name: "ebs_block_device".to_string(),
            hourly_cost: None,
            monthly_cost: None,
            cost_components: vec![component("Storage", "10", "GB-months", "0.1")],
            sub_resources: vec![],
        });

        let rows = report_rows(&root);
        let labels: Vec<&str> = rows.iter().map(|r| r.cells[0].as_str()).collect();

        assert_eq!(labels[2], "├─ root_block_device");
        assert_eq!(labels[3], "│  └─ Storage");
        assert_eq!(labels[4], "└─ ebs_block_device");
        assert_eq!(labels[5], "   └─ Storage");
    }

    #[test]
    fn test_format_report_table() {
        let widths = TableWidths::new(120);
        let output = format_report_table(&sample_report(), widths);
        let lines: Vec<&str> = output.lines().collect();

        // header (3) + rows (5) + separator + total + footer
        assert_eq!(lines.len(), 11);
        assert!(lines[9].starts_with("│ OVERALL TOTAL"));
        assert!(lines[9].ends_with(" 31.168 │"));
        for line in &lines {
            assert_eq!(console_format::display_width(line), 120, "line: {}", line);
        }
    }

    #[test]
    fn test_format_empty_report_table() {
        let root = Root::empty();
        let output = format_report_table(&root, TableWidths::new(120));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[3].starts_with("│ OVERALL TOTAL"));
        assert!(lines[3].ends_with(" - │"));
    }
}
