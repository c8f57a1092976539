/// End-to-end tests for the infracost-output binary
///
/// These tests run the compiled binary against the JSON fixtures in
/// test-reports/ and check stdout, stderr and exit status.
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// Helper to get the fixtures directory
fn fixtures_dir() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir).join("test-reports")
}

fn fixture(name: &str) -> String {
    fixtures_dir().join(name).display().to_string()
}

// Run the binary with an empty config so the user's own config never leaks in
fn run_binary(args: &[&str]) -> Output {
    let config_dir = tempfile::tempdir().expect("Should create temp dir");
    let config_path = config_dir.path().join("config.toml");
    std::fs::write(&config_path, "").expect("Should write empty config");

    Command::new(env!("CARGO_BIN_EXE_infracost-output"))
        .arg("--no-color")
        .arg("--config")
        .arg(&config_path)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run infracost-output {}: {}", args.join(" "), e))
}

fn assert_success(output: &Output, context: &str) {
    assert!(
        output.status.success(),
        "{} failed with status: {:?}\nstderr: {}",
        context,
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be a JSON report")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn resource_names(report: &Value) -> Vec<String> {
    report["resources"]
        .as_array()
        .expect("resources should be an array")
        .iter()
        .map(|r| r["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_fixtures_exist() {
    let fixtures = fixtures_dir();
    for name in ["priced-web.json", "priced-db.json", "report-a.json", "report-b.json", "malformed.json"] {
        assert!(fixtures.join(name).exists(), "missing fixture {}", name);
    }
}

#[test]
fn test_single_priced_input_keeps_warning() {
    let output = run_binary(&["--json", "--priced", &fixture("priced-web.json")]);
    assert_success(&output, "single priced input");

    let report = stdout_json(&output);
    assert_eq!(resource_names(&report), vec!["aws_instance.web"]);
    assert_eq!(report["totalMonthlyCost"], "38.368");
    assert_eq!(report["totalHourlyCost"], "0.0525589041");
    assert_eq!(report["resources"][0]["subresources"][0]["name"], "root_block_device");

    let warnings = report["warnings"].as_array().expect("warnings should be kept for a single input");
    assert_eq!(warnings.len(), 1);
    let warning = warnings[0].as_str().unwrap_or_default();
    assert!(warning.starts_with("1 resource type couldn't be estimated"));
    assert!(warning.contains("re-run with --show-skipped"));

    assert!(stderr(&output).contains("Warning: 1 resource type couldn't be estimated"));
}

#[test]
fn test_show_skipped_itemizes_types() {
    let output = run_binary(&["--json", "--show-skipped", "--priced", &fixture("priced-web.json")]);
    assert_success(&output, "show skipped");

    let report = stdout_json(&output);
    let warning = report["warnings"][0].as_str().unwrap_or_default();
    assert!(warning.ends_with("\n1 x aws_appsync_graphql_api"), "unexpected warning: {}", warning);
    assert!(!warning.contains("aws_iam_policy"));
}

#[test]
fn test_combines_priced_and_saved_reports() {
    let output = run_binary(&[
        "--json",
        "--priced",
        &fixture("priced-web.json"),
        &fixture("priced-db.json"),
        "--report",
        &fixture("report-a.json"),
        &fixture("report-b.json"),
    ]);
    assert_success(&output, "combine");

    let report = stdout_json(&output);
    assert_eq!(
        resource_names(&report),
        vec![
            "aws_db_instance.db",
            "aws_instance.web",
            "aws_lambda_function.hello",
            "azurerm_storage_account.logs",
            "google_compute_instance.worker",
        ]
    );
    assert_eq!(report["totalMonthlyCost"], "125.238");
    assert_eq!(report["totalHourlyCost"], "0.1715589041");
    assert!(report.get("warnings").is_none(), "combined report should carry no warnings");

    // Warnings of each input are still shown
    assert_eq!(stderr(&output).matches("Warning:").count(), 2);
}

#[test]
fn test_unit_multiplier_applied_to_priced_input() {
    let output = run_binary(&["--json", "--priced", &fixture("priced-db.json")]);
    assert_success(&output, "unit multiplier");

    let report = stdout_json(&output);
    let requests = &report["resources"][0]["costComponents"][1];
    assert_eq!(requests["unit"], "1000000 requests");
    assert!(requests["monthlyQuantity"].is_null());
    assert!(requests["monthlyCost"].is_null());
    assert!(report.get("warnings").is_none());
}

#[test]
fn test_table_output() {
    let output = run_binary(&["--console-width", "120", "--report", &fixture("report-b.json")]);
    assert_success(&output, "table output");

    let table = String::from_utf8_lossy(&output.stdout);
    assert!(table.contains("Monthly Cost"));
    assert!(table.contains("aws_lambda_function.hello"));
    assert!(table.contains("└─ Capacity"));
    assert!(table.contains("OVERALL TOTAL"));
    assert!(table.contains("1.46"));
    assert!(!table.contains('\x1b'), "--no-color should disable escape codes");
}

#[test]
fn test_output_file_round_trips() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let out_path = dir.path().join("combined.json");
    let out = out_path.display().to_string();

    let output = run_binary(&["--report", &fixture("report-a.json"), &fixture("report-b.json"), "--output", &out]);
    assert_success(&output, "export");
    assert!(stderr(&output).contains("Success: Report saved to"));

    let reload = run_binary(&["--json", "--report", &out]);
    assert_success(&reload, "reload exported report");

    let report = stdout_json(&reload);
    assert_eq!(report["totalMonthlyCost"], "74.46");
    assert_eq!(resource_names(&report).len(), 3);
}

#[test]
fn test_malformed_report_fails() {
    let output = run_binary(&["--json", "--report", &fixture("report-a.json"), &fixture("malformed.json")]);

    assert!(!output.status.success(), "malformed input should fail");
    assert!(output.stdout.is_empty());
    let err = stderr(&output);
    assert!(err.contains("Error:"), "stderr: {}", err);
    assert!(err.contains("invalid report data"), "stderr: {}", err);
}

#[test]
fn test_missing_input_fails() {
    let missing = fixtures_dir().join("does-not-exist.json").display().to_string();
    let output = run_binary(&["--report", &missing]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to access"));
}

#[test]
fn test_no_inputs_fails() {
    let output = run_binary(&["--json"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("No input given"));
}
