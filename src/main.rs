// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use infracost_output::config::{self, OutputFormat, RunPlan};
use infracost_output::{cli, console_format, report, summary, ui};
use log::debug;
use std::backtrace::Backtrace;
use std::panic;
use std::path::Path;

fn main() {
    env_logger::init();
    install_panic_hook();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e, !args.no_color);
        std::process::exit(1);
    }

    // Set console width override if specified (for testing)
    if let Some(width) = args.console_width {
        console_format::set_console_width(width);
    }

    let plan = match config::build_run_plan(&args) {
        Ok(p) => p,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e), !args.no_color);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&plan) {
        ui::print_error(&e, plan.use_colors);
        std::process::exit(1);
    }
}

/// Route panics through the crash banner instead of the default message
fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let stack = Backtrace::force_capture();
        ui::print_unexpected_error(&info.to_string(), &stack.to_string());
    }));
}

/// Build or load every input, merge them, then export and print
fn run(plan: &RunPlan) -> Result<(), String> {
    let reports = collect_reports(plan)?;

    for (path, root) in plan.priced_inputs.iter().chain(plan.report_inputs.iter()).zip(&reports) {
        for warning in &root.warnings {
            debug!("Warning from {}", path.display());
            ui::print_warning(warning, plan.use_colors);
        }
    }

    let root = match reports.as_slice() {
        [single] => single.clone(),
        many => report::combine(many),
    };

    if let Some(ref path) = plan.output_path {
        report::export_json_report(&root, path).map_err(|e| e.to_string())?;
        ui::print_success(&format!("Report saved to {}", path.display()), plan.use_colors);
    }

    match plan.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&root).map_err(|e| format!("Failed to encode report: {}", e))?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            report::print_report_table(&root, plan.use_colors)
                .map_err(|e| format!("Failed to print report: {}", e))?;
        }
    }

    Ok(())
}

/// Priced inputs first, then saved reports, each in argument order
fn collect_reports(plan: &RunPlan) -> Result<Vec<report::Root>, String> {
    let mut reports = Vec::with_capacity(plan.input_count());

    for path in &plan.priced_inputs {
        reports.push(build_priced_report(path, plan)?);
    }

    for path in &plan.report_inputs {
        let root = report::load_report_file(path).map_err(|e| e.to_string())?;
        debug!("Loaded {} resources from {}", root.resources.len(), path.display());
        reports.push(root);
    }

    Ok(reports)
}

fn build_priced_report(path: &Path, plan: &RunPlan) -> Result<report::Root, String> {
    let resources = report::load_priced_resources_file(path).map_err(|e| e.to_string())?;

    let counts = summary::generate_resource_summary(&resources);
    debug!(
        "{}: {} supported across {} types, {} unsupported, {} free",
        path.display(),
        counts.total_supported,
        counts.supported_counts.len(),
        counts.total_unsupported,
        counts.total_no_price
    );

    Ok(report::to_output_format(&resources, &plan.providers, &plan.build_options))
}
