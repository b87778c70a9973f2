//! CLI integration tests for all subcommands.
//!
//! Uses `assert_cmd` to spawn the `slate` binary and verify exit
//! codes, stdout content, and stderr content. Tests set `current_dir`
//! to the workspace root so relative paths to the demo configuration
//! documents resolve correctly.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Locate the workspace root by walking up from CARGO_MANIFEST_DIR.
fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // crates/cli -> workspace root is two levels up
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}

/// Helper: create a Command for the `slate` binary, rooted at the
/// workspace.
fn slate() -> Command {
    let mut cmd = Command::cargo_bin("slate").expect("slate binary");
    cmd.current_dir(workspace_root());
    cmd
}

const TEMPLATES: &str = "demos/landing-templates.json";
const LOGIC: &str = "demos/template-selection-logic.json";

// ──────────────────────────────────────────────
// Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    slate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Slate template selection toolchain"));
}

#[test]
fn version_exits_0() {
    slate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("slate"));
}

// ──────────────────────────────────────────────
// Ask subcommand
// ──────────────────────────────────────────────

#[test]
fn ask_low_price_script_selects_low_price_impulse() {
    slate()
        .args([
            "ask",
            "--templates",
            TEMPLATES,
            "--logic",
            LOGIC,
            "--answers",
            "demos/answers-low-price.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("template: low_price_impulse"));
}

#[test]
fn ask_json_output_is_machine_readable() {
    let assert = slate()
        .args([
            "--output",
            "json",
            "ask",
            "--templates",
            TEMPLATES,
            "--logic",
            LOGIC,
            "--answers",
            "demos/answers-low-price.json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON output");
    assert_eq!(json["type"], "template");
    assert_eq!(json["template"], "low_price_impulse");
    assert!(json["reason"].as_str().is_some_and(|r| !r.is_empty()));
}

#[test]
fn ask_b2b_scenario_overrides_rules() {
    slate()
        .args([
            "ask",
            "--templates",
            TEMPLATES,
            "--logic",
            LOGIC,
            "--answers",
            "demos/answers-b2b.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("template: b2b"));
}

#[test]
fn ask_with_truncated_script_exits_1() {
    let dir = TempDir::new().expect("tempdir");
    let answers = dir.path().join("partial.json");
    fs::write(
        &answers,
        r#"[{ "step": "step_1_product_type", "answer": "physical_product" }]"#,
    )
    .expect("write answers");

    slate()
        .args(["ask", "--templates", TEMPLATES, "--logic", LOGIC, "--answers"])
        .arg(&answers)
        .assert()
        .failure()
        .stderr(predicate::str::contains("exhausted"));
}

#[test]
fn ask_missing_file_reports_error() {
    slate()
        .args([
            "ask",
            "--templates",
            TEMPLATES,
            "--logic",
            LOGIC,
            "--answers",
            "demos/no-such-file.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

// ──────────────────────────────────────────────
// Quick subcommand
// ──────────────────────────────────────────────

#[test]
fn quick_matches_pre_order_keyword() {
    slate()
        .args(["quick", "--logic", LOGIC, "coming soon: our new gadget line"])
        .assert()
        .success()
        .stdout(predicate::str::contains("template: pre_order"));
}

#[test]
fn quick_without_match_suggests_questionnaire() {
    slate()
        .args(["quick", "--logic", LOGIC, "nothing relevant whatsoever"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no keyword match"));
}

// ──────────────────────────────────────────────
// Compat subcommand
// ──────────────────────────────────────────────

#[test]
fn compat_reports_conflict_with_warning() {
    slate()
        .args([
            "compat",
            "--logic",
            LOGIC,
            "b2b",
            "--scenarios",
            "limited_offer,pre_order",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("compatible: no")
                .and(predicate::str::contains("limited_offer")),
        );
}

#[test]
fn compat_lists_recommended_modifications() {
    slate()
        .args([
            "compat",
            "--logic",
            LOGIC,
            "physical_single",
            "--scenarios",
            "seasonal,limited_offer",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("compatible: yes")
                .and(predicate::str::contains("seasonal color scheme"))
                .and(predicate::str::contains("countdown_timer")),
        );
}

// ──────────────────────────────────────────────
// Info subcommand
// ──────────────────────────────────────────────

#[test]
fn info_prints_catalog_entry() {
    slate()
        .args(["info", "--templates", TEMPLATES, "physical_single"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Single product"));
}

#[test]
fn info_unknown_template_is_not_a_failure() {
    slate()
        .args(["info", "--templates", TEMPLATES, "nonexistent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not in the catalog"));
}

// ──────────────────────────────────────────────
// Validate subcommand
// ──────────────────────────────────────────────

#[test]
fn validate_demo_documents_is_clean() {
    slate()
        .args(["validate", "--logic", LOGIC, "--templates", TEMPLATES])
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration is consistent"));
}

#[test]
fn validate_self_looping_branch_exits_1() {
    let dir = TempDir::new().expect("tempdir");
    let logic = dir.path().join("broken.json");
    fs::write(
        &logic,
        r#"{
            "decision_tree": {
                "step_1_product_type": {
                    "question": "q", "options": [], "next_step": "looper"
                },
                "looper": {
                    "condition": {
                        "if": "x == 'never'",
                        "then": { "question": "q", "options": [] },
                        "next_step": "looper"
                    }
                }
            }
        }"#,
    )
    .expect("write logic");

    slate()
        .args(["validate", "--logic"])
        .arg(&logic)
        .assert()
        .failure()
        .stdout(predicate::str::contains("itself"));
}
