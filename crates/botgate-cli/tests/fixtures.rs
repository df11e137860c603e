//! End-to-end CLI integration tests using committed fixtures.
//!
//! Each fixture in `tests/fixtures/` contains:
//! - a bot project folder (project file, `.bot` manifest, `botgate.toml`)
//! - an `expected.report.json` with nondeterministic fields replaced by placeholders
//!
//! The CLI runs from inside the fixture with `--project-dir .` so messages that
//! mention the folder are stable.

use assert_cmd::Command;
use botgate_test_util::{SEALED_SECRET, WRONG_SECRET, normalize_nondeterministic};
use predicates::prelude::*;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

const SECRET_VAR: &str = "BOTGATE_FIXTURE_SECRET";

/// Wraps the deprecated cargo_bin to centralize the deprecation warning.
#[allow(deprecated)]
fn botgate_cmd() -> Command {
    Command::cargo_bin("botgate").expect("botgate binary not found - run `cargo build` first")
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("botgate-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

fn fixture_cmd(fixture_name: &str) -> Command {
    let mut cmd = botgate_cmd();
    cmd.current_dir(fixtures_dir().join(fixture_name))
        .env_remove(SECRET_VAR)
        .arg("--project-dir")
        .arg(".");
    cmd
}

/// Run `check` against a fixture and return the exit code and the JSON report.
fn run_check_on_fixture(fixture_name: &str) -> (i32, Value) {
    let temp_dir = TempDir::new().expect("create temp dir");
    let report_path = temp_dir.path().join("report.json");

    let output = fixture_cmd(fixture_name)
        .arg("check")
        .arg("--report-out")
        .arg(&report_path)
        .output()
        .expect("run botgate");

    let exit_code = output.status.code().unwrap_or(-1);
    let report_content = std::fs::read_to_string(&report_path).expect("read report");
    let report: Value = serde_json::from_str(&report_content).expect("parse report JSON");

    (exit_code, report)
}

fn load_expected_report(fixture_name: &str) -> Value {
    let expected_path = fixtures_dir()
        .join(fixture_name)
        .join("expected.report.json");
    let content = std::fs::read_to_string(&expected_path).expect("read expected report");
    serde_json::from_str(&content).expect("parse expected report")
}

fn assert_fixture(fixture_name: &str, expected_exit: i32) {
    let (exit_code, report) = run_check_on_fixture(fixture_name);
    assert_eq!(
        exit_code, expected_exit,
        "fixture '{fixture_name}' exited with {exit_code}"
    );

    let actual = normalize_nondeterministic(report);
    let expected = normalize_nondeterministic(load_expected_report(fixture_name));
    assert_eq!(
        actual,
        expected,
        "Report mismatch for fixture '{}'.\n\nActual:\n{}\n\nExpected:\n{}",
        fixture_name,
        serde_json::to_string_pretty(&actual).expect("pretty"),
        serde_json::to_string_pretty(&expected).expect("pretty"),
    );
}

// ============================================================================
// Fixture tests
// ============================================================================

#[test]
fn fixture_clean_passes() {
    assert_fixture("clean", 0);
}

#[test]
fn fixture_spaced_name_fails() {
    assert_fixture("spaced_name", 2);
}

#[test]
fn fixture_missing_manifest_fails() {
    assert_fixture("missing_manifest", 2);
}

#[test]
fn fixture_ambiguous_manifest_fails() {
    assert_fixture("ambiguous_manifest", 2);
}

#[test]
fn fixture_forbidden_endpoint_fails() {
    assert_fixture("forbidden_endpoint", 2);
}

#[test]
fn fixture_missing_nlu_key_fails() {
    assert_fixture("missing_nlu_key", 2);
}

#[test]
fn fixture_encrypted_manifest_fails_without_secret() {
    assert_fixture("encrypted_manifest", 2);
}

#[test]
fn fixture_manifest_not_required_skips_manifest_rules() {
    assert_fixture("manifest_not_required", 0);
}

// ============================================================================
// Fixture variations
// ============================================================================

#[test]
fn encrypted_manifest_passes_with_secret_from_env() {
    fixture_cmd("encrypted_manifest")
        .env(SECRET_VAR, SEALED_SECRET)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn encrypted_manifest_passes_with_secret_flag() {
    fixture_cmd("encrypted_manifest")
        .args(["check", "--secret", SEALED_SECRET])
        .assert()
        .success();
}

#[test]
fn encrypted_manifest_fails_with_wrong_secret() {
    fixture_cmd("encrypted_manifest")
        .args(["check", "--secret", WRONG_SECRET])
        .assert()
        .code(2)
        .stderr(
            "manifest ./secure.bot is malformed: secret does not unlock the manifest padlock\n",
        );
}

#[test]
fn encrypted_manifest_flag_secret_wins_over_env() {
    fixture_cmd("encrypted_manifest")
        .env(SECRET_VAR, WRONG_SECRET)
        .args(["check", "--secret", SEALED_SECRET])
        .assert()
        .success();
}

#[test]
fn cli_flag_overrides_config_file() {
    // The config enables the NLU key rule; the flag turns it back off.
    fixture_cmd("missing_nlu_key")
        .args(["check", "--require-nlu-key", "false"])
        .assert()
        .success();
}

#[test]
fn cli_flag_enables_rule_on_top_of_profile() {
    fixture_cmd("clean")
        .args(["check", "--forbid-endpoints", "production"])
        .assert()
        .code(2)
        .stderr("The manifest declares a forbidden endpoint.\n");
}

#[test]
fn profile_flag_overrides_config_profile() {
    // Dropping to the default profile disables the naming and manifest rules.
    fixture_cmd("spaced_name")
        .args(["--profile", "default", "check"])
        .assert()
        .success();
}

#[test]
fn github_format_emits_annotation() {
    fixture_cmd("spaced_name")
        .args(["check", "--format", "github"])
        .assert()
        .code(2)
        .stdout(
            "::error title=botgate::[project.name_no_spaces:project_name_has_spaces] \
             The project file name 'Echo Bot.csproj' must not contain whitespace.\n",
        );
}

#[test]
fn json_format_prints_report_to_stdout() {
    let output = fixture_cmd("forbidden_endpoint")
        .args(["check", "--format", "json"])
        .output()
        .expect("run botgate");

    assert_eq!(output.status.code(), Some(2));
    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(
        normalize_nondeterministic(report),
        normalize_nondeterministic(load_expected_report("forbidden_endpoint"))
    );
}

#[test]
fn inspect_prints_summary() {
    fixture_cmd("clean")
        .arg("inspect")
        .assert()
        .success()
        .stdout("echo-bot - Echo bot with state\n  endpoint: 1\n  luis: 1\n  qna: 1\n");
}

#[test]
fn inspect_fails_on_ambiguous_manifest() {
    fixture_cmd("ambiguous_manifest")
        .arg("inspect")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("a.bot, b.bot"));
}
