mod common;

use common::{read_file, run_in, write_file};
use tempfile::TempDir;

const FLAT_PAGE: &str = r#"---
title: "Arbitrum One"
description: "Arbitrum One data indexing and API access"
---

## Network Details

- Network ID: `arbitrum-one`
- Chain ID: `42161`
- Portal Status: Available
- Real-time Streaming: Yes
- Traces: Available
- State Diffs: Available

## Available Data

### Blocks

| Field | Type |
| --- | --- |
| number | int |

### Logs

| Field | Type |
| --- | --- |
| topics | string[] |
"#;

fn generate_args() -> Vec<&'static str> {
    vec!["pages", "generate", "--catalog", "catalog", "--family", "evm"]
}

#[test]
fn generate_writes_overview_and_schema() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "catalog/arbitrum-one.mdx", FLAT_PAGE);

    let output = run_in(dir.path(), &generate_args());
    assert!(
        output.status.success(),
        "generate failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generated: 1"), "stdout: {stdout}");

    let overview = read_file(dir.path(), "catalog/arbitrum-one/overview.mdx");
    assert!(overview.starts_with("---\ntitle: \"Overview\"\n"));
    assert!(overview.contains("- **Network ID**: `arbitrum-one`"));
    assert!(overview.contains("- **Chain ID**: `42161`"));
    assert!(overview.contains("https://portal.sqd.dev/datasets/arbitrum-one"));
    assert!(overview.contains("/en/data/catalog/evm/arbitrum-one/schema"));

    let schema = read_file(dir.path(), "catalog/arbitrum-one/schema.mdx");
    assert!(schema.contains("# Arbitrum One Data Schema"));
    assert!(schema.contains("<Accordion title=\"Blocks\">"));
    assert!(schema.contains("<Accordion title=\"Logs\">"));
    assert!(schema.contains("| topics | string[] |"));
}

#[test]
fn generate_skips_existing_unless_forced() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "catalog/arbitrum-one.mdx", FLAT_PAGE);
    write_file(dir.path(), "catalog/arbitrum-one/overview.mdx", "stale\n");

    let output = run_in(dir.path(), &generate_args());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Skipped:   1"), "stdout: {stdout}");
    assert_eq!(read_file(dir.path(), "catalog/arbitrum-one/overview.mdx"), "stale\n");

    let mut args = generate_args();
    args.push("--force");
    let output = run_in(dir.path(), &args);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generated: 1"), "stdout: {stdout}");
    assert!(
        read_file(dir.path(), "catalog/arbitrum-one/overview.mdx")
            .contains("- **Network ID**: `arbitrum-one`")
    );
}

#[test]
fn generate_skips_page_without_title() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "catalog/no-title.mdx",
        "---\nicon: \"bolt\"\n---\n\nBody\n",
    );

    let output = run_in(dir.path(), &generate_args());
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Skipped:   1"), "stdout: {stdout}");
    assert!(!dir.path().join("catalog/no-title").exists());
}

#[test]
fn generate_missing_source_for_explicit_slug_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "catalog/arbitrum-one.mdx", FLAT_PAGE);

    let mut args = generate_args();
    args.push("no-such-net");
    let output = run_in(dir.path(), &args);
    assert_eq!(output.status.code(), Some(5));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("source page not found"), "stderr: {stderr}");
    assert!(stderr.contains("no-such-net"), "stderr: {stderr}");
}

#[test]
fn generate_missing_title_for_explicit_slug_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "catalog/no-title.mdx",
        "---\nicon: \"bolt\"\n---\n\nBody\n",
    );

    let mut args = generate_args();
    args.push("no-title");
    let output = run_in(dir.path(), &args);
    assert_eq!(output.status.code(), Some(5));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot extract 'title'"), "stderr: {stderr}");
    assert!(!dir.path().join("catalog/no-title").exists());
}

#[test]
fn generate_substrate_uses_gateway_snippet() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "catalog/acala.mdx",
        "---\ntitle: \"Acala\"\ndescription: \"Acala data indexing\"\n---\n\nBody\n",
    );

    let output = run_in(
        dir.path(),
        &["pages", "generate", "--catalog", "catalog", "--family", "substrate"],
    );
    assert!(output.status.success());

    let overview = read_file(dir.path(), "catalog/acala/overview.mdx");
    assert!(overview.contains("https://v2.archive.subsquid.io/network/acala"));
    assert!(overview.contains("SubstrateBatchProcessor"));
    assert!(!overview.contains("<Tabs>"));
    assert!(overview.contains("/en/data/catalog/substrate/acala/schema"));
}
