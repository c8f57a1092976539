/// Configuration resolution module
///
/// This module handles:
/// - Locating and parsing the optional TOML config file
/// - Merging file settings with CLI arguments
/// - Building the immutable RunPlan the binary executes
use crate::cli::{self, CliArgs};
use crate::providers::{DEFAULT_PROVIDER_PREFIXES, PrefixProviders};
use crate::report::BuildOptions;
use log::debug;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a config file
pub const CONFIG_ENV_VAR: &str = "INFRACOST_OUTPUT_CONFIG";

/// Settings read from the config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub show_skipped: bool,
    pub no_color: bool,
    /// Resource type prefixes that have pricing providers
    pub provider_prefixes: Vec<String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            show_skipped: false,
            no_color: false,
            provider_prefixes: DEFAULT_PROVIDER_PREFIXES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// How the final report is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Fully resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub priced_inputs: Vec<PathBuf>,
    pub report_inputs: Vec<PathBuf>,
    pub build_options: BuildOptions,
    pub providers: PrefixProviders,
    pub format: OutputFormat,
    pub output_path: Option<PathBuf>,
    pub use_colors: bool,
}

impl RunPlan {
    /// Total number of reports this run produces before combining
    pub fn input_count(&self) -> usize {
        self.priced_inputs.len() + self.report_inputs.len()
    }
}

/// Build a complete RunPlan from CLI arguments and the config file
///
/// CLI flags win over file settings.
pub fn build_run_plan(args: &CliArgs) -> Result<RunPlan, String> {
    debug!("Building run plan from CLI args");

    let file_config = match resolve_config_path(args)? {
        Some(path) => load_config_file(&path)?,
        None => FileConfig::default(),
    };

    let plan = RunPlan {
        priced_inputs: args.priced.clone(),
        report_inputs: args.reports.clone(),
        build_options: BuildOptions { show_skipped: args.show_skipped || file_config.show_skipped },
        providers: PrefixProviders::new(file_config.provider_prefixes),
        format: if args.json { OutputFormat::Json } else { OutputFormat::Table },
        output_path: args.output.clone(),
        use_colors: !(args.no_color || file_config.no_color),
    };

    debug!("Resolved {} inputs, format {:?}", plan.input_count(), plan.format);
    debug!("Provider prefixes: {:?}", plan.providers.prefixes());

    Ok(plan)
}

/// Find the config file to use, if any
///
/// An explicit --config or environment path must exist; the default path is optional.
fn resolve_config_path(args: &CliArgs) -> Result<Option<PathBuf>, String> {
    if let Some(ref path) = args.config {
        debug!("Using config from --config: {}", path.display());
        return require_existing(path).map(Some);
    }

    if let Ok(path) = env::var(CONFIG_ENV_VAR)
        && !path.is_empty()
    {
        debug!("Using config from {}: {}", CONFIG_ENV_VAR, path);
        return require_existing(Path::new(&path)).map(Some);
    }

    Ok(cli::default_config_path().filter(|p| p.is_file()))
}

fn require_existing(path: &Path) -> Result<PathBuf, String> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(format!("Config file not found: {}", path.display()))
    }
}

/// Parse a TOML config file
pub fn load_config_file(path: &Path) -> Result<FileConfig, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&content).map_err(|e| format!("Invalid config {}: {}", path.display(), e))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
