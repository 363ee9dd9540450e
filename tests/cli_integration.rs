//! CLI integration tests for solver-opts
//!
//! These drive the binary end to end: flags are applied to the process-wide
//! registry, then the commands read it back.

use predicates::prelude::*;

/// Get a command instance for the solver-opts binary
fn solver_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("solver-opts"))
}

fn json_stdout(args: &[&str]) -> serde_json::Value {
    let output = solver_cmd().args(args).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_show_lists_defaults() {
    solver_cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("num-workers\tint\t1"))
        .stdout(predicate::str::contains("num-online-divides\tint\t2"))
        .stdout(predicate::str::contains("timeout-factor\tfloat\t1.5"))
        .stdout(predicate::str::contains("constraint-violation-threshold\tint\t20"))
        .stdout(predicate::str::contains("dnc\tbool\tfalse"))
        .stdout(predicate::str::contains("split-strategy\ttext\t\"\""))
        .stdout(predicate::str::contains("gamma-abstract\tbound-table\t{}"))
        .stdout(predicate::str::contains("gamma\tflag-table-list\t[]"));
}

#[test]
fn test_show_json_has_whole_catalog() {
    let json = json_stdout(&["--format", "json", "show"]);
    let options = json["options"].as_array().unwrap();
    assert_eq!(options.len(), 28);

    let verbosity = options
        .iter()
        .find(|o| o["name"] == "verbosity")
        .unwrap();
    assert_eq!(verbosity["shape"], "int");
    assert_eq!(verbosity["value"], 2);

    let post = options
        .iter()
        .find(|o| o["name"] == "post-var-indices")
        .unwrap();
    assert_eq!(post["shape"], "index-table");
    assert_eq!(post["value"], serde_json::json!({}));
}

// =============================================================================
// Flags
// =============================================================================

#[test]
fn test_flags_override_defaults() {
    solver_cmd()
        .args(["--num-workers", "4", "get", "num-workers"])
        .assert()
        .success()
        .stdout("4\n");

    solver_cmd()
        .args(["get", "dnc", "--dnc"])
        .assert()
        .success()
        .stdout("true\n");

    solver_cmd()
        .args(["--input", "net.nnet", "get", "input"])
        .assert()
        .success()
        .stdout("\"net.nnet\"\n");
}

#[test]
fn test_untouched_option_keeps_default() {
    solver_cmd()
        .args(["--timeout", "60", "get", "initial-timeout"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_get_json() {
    let json = json_stdout(&["--format", "json", "--timeout-factor", "3", "get", "timeout-factor"]);
    assert_eq!(json["name"], "timeout-factor");
    assert_eq!(json["shape"], "float");
    assert_eq!(json["value"], 3.0);
}

#[test]
fn test_get_unknown_option_fails() {
    solver_cmd()
        .args(["get", "num_workers"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown option 'num_workers'"));
}

#[test]
fn test_invalid_flag_value_fails() {
    solver_cmd()
        .args(["--num-workers", "many", "show"])
        .assert()
        .failure();
}

#[test]
fn test_verbose_logs_writes() {
    solver_cmd()
        .args(["--verbose", "--num-workers", "4", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose:parse] set num-workers = 4"));
}

#[test]
fn test_help_lists_flags() {
    solver_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--split-strategy"))
        .stdout(predicate::str::contains("--snc-split-strategy"))
        .stdout(predicate::str::contains("--milp-tightening"))
        .stdout(predicate::str::contains("--preprocessor-bound-tolerance"));
}

// =============================================================================
// Strategies
// =============================================================================

#[test]
fn test_default_strategies() {
    solver_cmd()
        .arg("strategies")
        .assert()
        .success()
        .stdout(predicate::str::contains("split-strategy\tauto"))
        .stdout(predicate::str::contains("snc-split-strategy\tauto"));
}

#[test]
fn test_strategies_follow_flags() {
    solver_cmd()
        .args([
            "--split-strategy",
            "largest-interval",
            "--snc-split-strategy",
            "polarity",
            "strategies",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("split-strategy\tlargest-interval"))
        .stdout(predicate::str::contains("snc-split-strategy\tpolarity"));
}

#[test]
fn test_unrecognized_strategy_falls_back() {
    let json = json_stdout(&["--format", "json", "--split-strategy", "foo", "strategies"]);
    assert_eq!(json["split_strategy"], "auto");
}

#[cfg(not(feature = "gurobi"))]
#[test]
fn test_bound_tightening_disabled_without_backend() {
    let json = json_stdout(&["--format", "json", "--milp-tightening", "milp", "strategies"]);
    assert_eq!(json["gurobi_enabled"], false);
    assert_eq!(json["milp_tightening"], "none");
}

#[cfg(feature = "gurobi")]
#[test]
fn test_bound_tightening_with_backend() {
    let json = json_stdout(&["--format", "json", "--milp-tightening", "milp", "strategies"]);
    assert_eq!(json["gurobi_enabled"], true);
    assert_eq!(json["milp_tightening"], "milp");

    let json = json_stdout(&["--format", "json", "strategies"]);
    assert_eq!(json["milp_tightening"], "lp");
}
