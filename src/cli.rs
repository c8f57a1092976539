use clap::Parser;
use std::path::PathBuf;

/// Default location of the config file
/// Uses platform-specific config directories:
/// - Linux: ~/.config/infracost-output/config.toml
/// - macOS: ~/Library/Application Support/infracost-output/config.toml
/// - Windows: %APPDATA%/infracost-output/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("infracost-output").join("config.toml"))
}

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "infracost-output")]
#[command(about = "Build, combine and render cost estimate reports")]
#[command(version)]
pub struct CliArgs {
    /// Priced resource files from the pricing stage (JSON array of resources)
    /// Each file becomes one report; several inputs are combined
    #[arg(long, value_name = "FILE", num_args = 1..)]
    pub priced: Vec<PathBuf>,

    /// Previously generated JSON reports to load and combine
    #[arg(long = "report", value_name = "FILE", num_args = 1..)]
    pub reports: Vec<PathBuf>,

    /// List the unsupported resource types in the warning
    #[arg(long)]
    pub show_skipped: bool,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Also write the report as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file (default: platform config dir, or $INFRACOST_OUTPUT_CONFIG)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Override console width (default: auto-detect)
    #[arg(long, value_name = "COLUMNS")]
    pub console_width: Option<usize>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.priced.is_empty() && self.reports.is_empty() {
            return Err("No input given: pass at least one --priced or --report file".to_string());
        }

        if let Some(width) = self.console_width
            && width < 40
        {
            return Err(format!("--console-width must be at least 40 (got {})", width));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiple_inputs() {
        let args = CliArgs::try_parse_from([
            "infracost-output",
            "--priced",
            "a.json",
            "b.json",
            "--report",
            "old.json",
            "--show-skipped",
            "--json",
        ])
        .unwrap();

        assert_eq!(args.priced, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
        assert_eq!(args.reports, vec![PathBuf::from("old.json")]);
        assert!(args.show_skipped);
        assert!(args.json);
        assert!(!args.no_color);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_input() {
        let args = CliArgs::try_parse_from(["infracost-output", "--json"]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_console_width() {
        let args = CliArgs { priced: vec![PathBuf::from("a.json")], console_width: Some(10), ..Default::default() };
        assert!(args.validate().is_err());

        let args = CliArgs { console_width: Some(80), ..args };
        assert!(args.validate().is_ok());
    }
}
