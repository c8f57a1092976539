//! Report export and file loading.
//!
//! This module handles reading and writing the JSON files that carry
//! priced resources into the report layer and reports between runs.

use super::combine::load;
use super::types::Root;
use crate::error::ReportError;
use crate::types::PricedResource;
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export a report as pretty-printed JSON.
///
/// # Arguments
/// * `root` - The report to write
/// * `output_path` - Path to write the JSON file
pub fn export_json_report(root: &Root, output_path: &Path) -> Result<(), ReportError> {
    debug!("Writing JSON report to {}", output_path.display());

    let file = File::create(output_path).map_err(|e| ReportError::io(output_path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, root).map_err(ReportError::Serialization)?;
    writeln!(writer).map_err(|e| ReportError::io(output_path, e))?;
    writer.flush().map_err(|e| ReportError::io(output_path, e))?;

    Ok(())
}

/// Load a report previously written by [`export_json_report`].
pub fn load_report_file(path: &Path) -> Result<Root, ReportError> {
    debug!("Loading report from {}", path.display());
    let data = fs::read(path).map_err(|e| ReportError::io(path, e))?;
    load(&data)
}

/// Load the priced resources handed over by the pricing stage.
///
/// The file holds a JSON array of priced resources.
pub fn load_priced_resources_file(path: &Path) -> Result<Vec<PricedResource>, ReportError> {
    debug!("Loading priced resources from {}", path.display());
    let data = fs::read(path).map_err(|e| ReportError::io(path, e))?;
    serde_json::from_slice(&data).map_err(ReportError::Deserialization)
}
