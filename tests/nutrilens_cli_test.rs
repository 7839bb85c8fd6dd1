// ABOUTME: Integration tests for the nutrilens-cli binary
// ABOUTME: Runs score and catalog commands against temporary fixture files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens Contributors

//! Integration tests for the nutrilens-cli binary.
//!
//! These tests verify command structure, JSON output, and exit statuses.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str], envs: &[(&str, &str)]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_nutrilens-cli"))
        .args(args)
        .envs(envs.iter().copied())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn write_fixture(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn cured_meat_fixture() -> Value {
    json!({
        "product_name": "Smoked Ham",
        "ingredients": [
            { "name": "Pork", "risk_score": 5 },
            {
                "name": "Sodium Nitrite",
                "risk_level": "warning",
                "risk_score": 90,
                "category": "warning",
                "regulatory": { "e_number": "E250" }
            }
        ],
        "nutrients": { "sodium_mg": 1100.0, "fat_g": 6.0 }
    })
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"], &[]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    assert!(stdout.contains("score"), "Help should mention 'score'");
    assert!(stdout.contains("catalog"), "Help should mention 'catalog'");
}

#[test]
fn test_score_prints_report() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path(), "ham.json", &cured_meat_fixture());

    let (exit_code, stdout, stderr) = run_cli(&["score", "--input", input.to_str().unwrap()], &[]);
    assert_eq!(exit_code, 0, "stderr: {stderr}");

    let report: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["product_name"], "Smoked Ham");
    assert_eq!(report["analysis"]["breakdown"]["final_score"], 35.0);
    assert_eq!(
        report["analysis"]["breakdown"]["applied_floor"]["trigger"],
        "carcinogen_group_1"
    );
    assert_eq!(report["analysis"]["risk_band"], "high");
    assert!(report.get("alerts").is_none());
}

#[test]
fn test_score_with_profile_compact() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path(), "ham.json", &cured_meat_fixture());
    let profile = write_fixture(
        dir.path(),
        "profile.json",
        &json!({ "diseases": ["hypertension"], "goals": ["low-sodium"] }),
    );

    let (exit_code, stdout, stderr) = run_cli(
        &[
            "score",
            "--input",
            input.to_str().unwrap(),
            "--profile",
            profile.to_str().unwrap(),
            "--compact",
        ],
        &[],
    );
    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert_eq!(stdout.trim_end().lines().count(), 1);

    let report: Value = serde_json::from_str(&stdout).unwrap();
    let alerts = &report["alerts"];
    assert_eq!(alerts["severity"], "warning");
    assert_eq!(alerts["disease_alerts"][0]["ingredient_name"], "Sodium Nitrite");
    assert_eq!(alerts["health_goal_alerts"][0]["status"], "danger");
}

#[test]
fn test_malformed_input_exits_with_validation_status() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"ingredients\": [").unwrap();

    let (exit_code, stdout, stderr) = run_cli(&["score", "--input", path.to_str().unwrap()], &[]);
    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error"));
}

#[test]
fn test_missing_input_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let (exit_code, _stdout, stderr) = run_cli(&["score", "--input", path.to_str().unwrap()], &[]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Error"));
}

#[test]
fn test_invalid_env_config_exits_with_config_status() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(dir.path(), "ham.json", &cured_meat_fixture());

    let (exit_code, _stdout, stderr) = run_cli(
        &["score", "--input", input.to_str().unwrap()],
        &[("NUTRILENS_RISK_BAND_LOW_MIN", "10")],
    );
    assert_eq!(exit_code, 3, "stderr: {stderr}");
}

#[test]
fn test_catalog_additives_lists_entries() {
    let (exit_code, stdout, _stderr) = run_cli(&["catalog", "additives"], &[]);
    assert_eq!(exit_code, 0);

    let catalog: Value = serde_json::from_str(&stdout).unwrap();
    let entries = catalog.as_array().unwrap();
    assert_eq!(entries[0]["id"], "sodium_nitrite");
    assert_eq!(entries[0]["carcinogen"], "group_1");
    assert!(entries.iter().any(|entry| entry["id"] == "lecithins"));
}

#[test]
fn test_catalog_rejects_unknown_kind() {
    let (exit_code, _stdout, stderr) = run_cli(&["catalog", "recipes"], &[]);
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("invalid value"));
}
