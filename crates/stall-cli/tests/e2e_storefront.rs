//! E2E CLI tests for the storefront surface.
//!
//! Each test runs `stall` as a subprocess with an isolated data
//! directory, exercising the cart persistence contract, the view filter,
//! and the JSON output contracts.

use assert_cmd::Command;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test Harness
// ---------------------------------------------------------------------------

/// Build a Command targeting the stall binary with an isolated data dir.
fn stall_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stall"));
    cmd.env("STALL_DATA_DIR", data_dir);
    // Keep the test environment hermetic: no user config, quiet logs.
    cmd.env("XDG_CONFIG_HOME", data_dir.join("xdg-config"));
    cmd.env("STALL_LOG", "error");
    cmd
}

/// Run `stall cart --json` and return the parsed panel.
fn cart_json(data_dir: &Path) -> Value {
    let output = stall_cmd(data_dir)
        .args(["cart", "--json"])
        .output()
        .expect("cart should not crash");
    assert!(
        output.status.success(),
        "cart failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("cart --json should produce valid JSON")
}

/// Run `stall add <id> --json` and return the parsed summary.
fn add_json(data_dir: &Path, id: &str) -> Value {
    let output = stall_cmd(data_dir)
        .args(["add", id, "--json"])
        .output()
        .expect("add should not crash");
    assert!(
        output.status.success(),
        "add {id} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("add --json should produce valid JSON")
}

/// Run `stall list --json` with extra args and return the parsed array.
fn list_json(data_dir: &Path, extra: &[&str]) -> Vec<Value> {
    let mut args = vec!["list", "--json"];
    args.extend_from_slice(extra);
    let output = stall_cmd(data_dir)
        .args(&args)
        .output()
        .expect("list should not crash");
    assert!(
        output.status.success(),
        "list failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: Value =
        serde_json::from_slice(&output.stdout).expect("list --json should produce valid JSON");
    value.as_array().cloned().unwrap_or_default()
}

// ===========================================================================
// Cart contract
// ===========================================================================

#[test]
fn add_twice_then_decrement_leaves_one_unit() {
    let dir = TempDir::new().unwrap();

    add_json(dir.path(), "p3");
    let summary = add_json(dir.path(), "p3");
    assert_eq!(summary["quantity"], 2);

    stall_cmd(dir.path()).args(["dec", "p3"]).assert().success();

    let panel = cart_json(dir.path());
    assert_eq!(panel["count"], 1);
    assert_eq!(panel["total"], "$29.99");
    let lines = panel["lines"].as_array().expect("lines array");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["id"], "p3");
    assert_eq!(lines[0]["quantity"], 1);
    assert_eq!(lines[0]["line_total"], "$29.99");
}

#[test]
fn cart_persists_across_invocations() {
    let dir = TempDir::new().unwrap();

    add_json(dir.path(), "p1");
    add_json(dir.path(), "p4");
    add_json(dir.path(), "p4");

    // Every mutation rewrote the mapping in full.
    let raw = std::fs::read_to_string(dir.path().join("cart.json")).expect("cart file exists");
    let mapping: Value = serde_json::from_str(&raw).expect("flat JSON mapping");
    assert_eq!(mapping["p1"], 1);
    assert_eq!(mapping["p4"], 2);

    // A fresh invocation sees the same cart.
    let panel = cart_json(dir.path());
    assert_eq!(panel["count"], 3);
    assert_eq!(panel["total"], "$159.97");
}

#[test]
fn decrement_to_zero_removes_the_entry_from_the_file() {
    let dir = TempDir::new().unwrap();

    add_json(dir.path(), "p2");
    stall_cmd(dir.path()).args(["dec", "p2"]).assert().success();

    let raw = std::fs::read_to_string(dir.path().join("cart.json")).expect("cart file exists");
    assert_eq!(raw, "{}");

    // Decrementing the absent entry again is a clean no-op.
    stall_cmd(dir.path()).args(["dec", "p2"]).assert().success();
    let panel = cart_json(dir.path());
    assert_eq!(panel["count"], 0);
}

#[test]
fn malformed_cart_file_yields_an_empty_cart() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("cart.json"), "definitely not json").unwrap();

    let panel = cart_json(dir.path());
    assert_eq!(panel["count"], 0);
    assert_eq!(panel["total"], "$0.00");
    assert!(panel["lines"].as_array().expect("lines").is_empty());
}

#[test]
fn unknown_product_add_is_a_noop_with_zero_exit() {
    let dir = TempDir::new().unwrap();

    let output = stall_cmd(dir.path())
        .args(["add", "ghost"])
        .output()
        .expect("add should not crash");
    assert!(output.status.success(), "unknown add must not fail the CLI");
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("not found"),
        "stderr should mention the unknown product"
    );

    let panel = cart_json(dir.path());
    assert_eq!(panel["count"], 0);
}

#[test]
fn increment_requires_an_existing_entry() {
    let dir = TempDir::new().unwrap();

    stall_cmd(dir.path()).args(["inc", "p5"]).assert().success();
    assert_eq!(cart_json(dir.path())["count"], 0);

    add_json(dir.path(), "p5");
    stall_cmd(dir.path()).args(["inc", "p5"]).assert().success();
    assert_eq!(cart_json(dir.path())["count"], 2);
}

// ===========================================================================
// Catalog and filtering
// ===========================================================================

#[test]
fn list_shows_the_whole_demo_catalog() {
    let dir = TempDir::new().unwrap();
    let items = list_json(dir.path(), &[]);
    assert_eq!(items.len(), 6);
    assert_eq!(items[0]["id"], "p1");
    assert_eq!(items[0]["price"], "$59.99");
    // One-shot output takes the immediate-load fallback, so every card
    // carries its image URL.
    assert!(items.iter().all(|item| item["image"].is_string()));
}

#[test]
fn category_and_query_filters_combine() {
    let dir = TempDir::new().unwrap();
    let items = list_json(dir.path(), &["--category", "Audio", "--query", "speaker"]);
    let titles: Vec<&str> = items
        .iter()
        .map(|item| item["title"].as_str().expect("title"))
        .collect();
    assert_eq!(titles, vec!["Portable Speaker"]);
}

#[test]
fn query_matches_case_insensitively() {
    let dir = TempDir::new().unwrap();
    let items = list_json(dir.path(), &["--query", "SPEAKER"]);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "p4");
}

#[test]
fn categories_lead_with_the_all_sentinel() {
    let dir = TempDir::new().unwrap();
    let output = stall_cmd(dir.path())
        .args(["categories", "--json"])
        .output()
        .expect("categories should not crash");
    assert!(output.status.success());
    let options: Vec<Value> = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(options[0]["value"], "all");
    assert_eq!(options[0]["label"], "All");
    assert_eq!(options.len(), 5);
}

#[test]
fn show_reports_details_for_a_known_product() {
    let dir = TempDir::new().unwrap();
    let output = stall_cmd(dir.path())
        .args(["show", "p3", "--json"])
        .output()
        .expect("show should not crash");
    assert!(output.status.success());
    let item: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(item["title"], "Gaming Mouse");
    assert_eq!(item["category"], "Accessories");
    assert_eq!(item["price"], "$29.99");
}

#[test]
fn show_fails_for_an_unknown_product() {
    let dir = TempDir::new().unwrap();
    let output = stall_cmd(dir.path())
        .args(["show", "ghost"])
        .output()
        .expect("show should not crash");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
}

#[test]
fn custom_catalog_file_replaces_the_demo_set() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("shop.toml");
    std::fs::write(
        &catalog_path,
        r#"
[[products]]
id = "lamp"
title = "Desk Lamp"
category = "Lighting"
price = "19.99"
image = "https://example.com/lamp.jpg"
"#,
    )
    .unwrap();

    let output = stall_cmd(dir.path())
        .args(["--catalog", catalog_path.to_str().unwrap(), "list", "--json"])
        .output()
        .expect("list should not crash");
    assert!(output.status.success());
    let items: Vec<Value> = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "lamp");
    assert_eq!(items[0]["price"], "$19.99");
}

#[test]
fn broken_catalog_file_is_a_reported_error() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("broken.toml");
    std::fs::write(&catalog_path, "products = 7").unwrap();

    let output = stall_cmd(dir.path())
        .args(["--catalog", catalog_path.to_str().unwrap(), "list"])
        .output()
        .expect("list should not crash");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"), "stderr: {stderr}");
}

// ===========================================================================
// Contact form
// ===========================================================================

#[test]
fn contact_with_all_fields_reports_simulated_success() {
    let dir = TempDir::new().unwrap();
    stall_cmd(dir.path())
        .args([
            "contact",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--message",
            "Do you ship overseas?",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Message sent! (Demo)"));
}

#[test]
fn contact_with_a_blank_message_fails_validation() {
    let dir = TempDir::new().unwrap();
    let output = stall_cmd(dir.path())
        .args([
            "contact",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--message",
            "   ",
        ])
        .output()
        .expect("contact should not crash");
    assert!(!output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("Please fill out all fields."),
        "failure status should be surfaced"
    );
}
