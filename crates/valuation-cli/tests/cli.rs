//! End-to-end tests for the `valuation` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's config file.
fn valuation(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("valuation").unwrap();
    cmd.env("VALUATION_CONFIG", config_dir.path().join("config.json"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn ddm_minimal_prints_value() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .args(["--format", "minimal", "ddm", "--dividend", "2", "--discount", "8", "--growth", "2"])
        .assert()
        .success()
        .stdout("34.00\n");
}

#[test]
fn ddm_rejects_discount_not_above_growth() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .args(["ddm", "--discount", "5", "--growth", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parameters"));
}

#[test]
fn dcf_default_value() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .args(["-f", "minimal", "dcf"])
        .assert()
        .success()
        .stdout("781180.28\n");
}

#[test]
fn dcf_rejects_out_of_range_discount() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .args(["dcf", "--discount", "25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input out of range"));
}

#[test]
fn dcf_table_has_title() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .arg("dcf")
        .assert()
        .success()
        .stdout(predicate::str::contains("781,180.28"));
}

#[test]
fn fair_pbv_and_normalized_pe() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .args(["-f", "minimal", "pbv"])
        .assert()
        .success()
        .stdout("1.33\n");
    valuation(&dir)
        .args(["-f", "minimal", "normalized-pe"])
        .assert()
        .success()
        .stdout("13.33\n");
}

#[test]
fn pbv_rejects_cost_of_capital_not_above_growth() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .args(["pbv", "--cost-of-capital", "4", "--growth", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parameters"));
}

#[test]
fn relative_classifies_target() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .args(["-f", "minimal", "relative", "--target", "10", "--peers", "12,12,12"])
        .assert()
        .success()
        .stdout("below\n");
    valuation(&dir)
        .args(["-f", "minimal", "relative", "--target", "15", "--peers", "12,14,16,18"])
        .assert()
        .success()
        .stdout("equal\n");
}

#[test]
fn growth_json_carries_cash_flows() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .args(["--format", "json", "growth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cash_flows\""))
        .stdout(predicate::str::contains("31752"));
}

#[test]
fn intrinsic_accepts_flow_list() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .args(["-f", "csv", "intrinsic", "--flows", "100,110,121"])
        .assert()
        .success()
        .stdout(predicate::str::contains("year,cash_flow,present_value"));
}

#[test]
fn topic_list_and_unknown_topic() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .arg("topic")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cyclical Companies"));
    valuation(&dir)
        .args(["topic", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown topic: 9"));
}

#[test]
fn topic_runs_hosted_calculators() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .args(["-q", "-f", "minimal", "topic", "6"])
        .assert()
        .success()
        .stdout("1.33\n34.00\n");
}

#[test]
fn bounds_filter() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .args(["-f", "csv", "bounds", "dividend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dividend"))
        .stdout(predicate::str::contains("peer-count").not());
}

#[test]
fn config_round_trip_drives_output() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .args(["config", "set", "precision", "4"])
        .assert()
        .success();
    valuation(&dir)
        .args(["config", "set", "format", "minimal"])
        .assert()
        .success();
    valuation(&dir)
        .args(["config", "get", "decimal_precision"])
        .assert()
        .success()
        .stdout("4\n");
    valuation(&dir)
        .arg("pbv")
        .assert()
        .success()
        .stdout("1.3333\n");

    valuation(&dir)
        .args(["config", "reset", "--all"])
        .assert()
        .success();
    valuation(&dir)
        .args(["-f", "minimal", "pbv"])
        .assert()
        .success()
        .stdout("1.33\n");
}

#[test]
fn config_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .args(["config", "set", "precision", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for decimal_precision"));
    valuation(&dir)
        .args(["config", "set", "daycount", "act360"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn growth_rejects_out_of_range_discount_override() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .args(["-f", "minimal", "growth", "--discount", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Growth Company Discount Rate"));
    valuation(&dir)
        .args(["-f", "minimal", "growth", "--scenario", "optimistic", "--discount", "15"])
        .assert()
        .success();
}

#[test]
fn rejected_parameters_reported_once() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .args(["ddm", "--discount", "5", "--growth", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parameters"))
        .stderr(predicate::str::contains("WARN").not());
    valuation(&dir)
        .args(["--verbose", "ddm", "--discount", "5", "--growth", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rejected discount rate"));
}

#[test]
fn chart_and_terminal_share_rows() {
    let dir = TempDir::new().unwrap();
    valuation(&dir)
        .args(["-f", "csv", "dcf", "--chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("year,intrinsic,market,margin"));
    valuation(&dir)
        .args(["-f", "csv", "intrinsic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal Value Share"));
}
