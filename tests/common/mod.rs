//! Shared integration-test harness for running the `docsteward` binary
//! against throwaway documentation trees.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Runs the binary with the given arguments, `dir` as working directory.
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_docsteward");
    Command::new(bin)
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run docsteward")
}

/// Writes a file under `root`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write fixture file");
}

/// Writes a per-network overview page so the slug lands in the catalog.
pub fn write_network_overview(root: &Path, chain: &str, slug: &str, description: &str) {
    write_file(
        root,
        &format!("en/data/catalog/{chain}/{slug}/overview.mdx"),
        &format!("---\ntitle: \"Overview\"\ndescription: \"{description}\"\n---\n\nBody\n"),
    );
}

/// A docs.json with one EVM group holding a convertible flat entry, a
/// flat entry with no catalog match, and an already-nested entry, plus
/// a sibling group without a pages key.
pub fn sample_manifest() -> &'static str {
    r#"{
  "$schema": "https://mintlify.com/docs.json",
  "name": "Test Docs",
  "navigation": {
    "languages": [
      {
        "language": "en",
        "tabs": [
          {
            "tab": "Data",
            "dropdowns": [
              {
                "dropdown": "EVM Data",
                "groups": [
                  {
                    "group": "Supported Networks",
                    "pages": [
                      "en/data/catalog/evm/arbitrum-one",
                      "en/data/catalog/evm/unknown-net",
                      {
                        "group": "Ethereum Mainnet",
                        "pages": [
                          "en/data/catalog/evm/ethereum-mainnet/overview",
                          "en/data/catalog/evm/ethereum-mainnet/schema"
                        ]
                      }
                    ]
                  },
                  {
                    "group": "More Resources"
                  }
                ]
              }
            ]
          }
        ]
      }
    ]
  }
}"#
}

/// Standard normalize invocation against the sample manifest layout.
pub fn normalize_args<'a>() -> Vec<&'a str> {
    vec![
        "nav",
        "normalize",
        "--manifest",
        "docs.json",
        "--catalog",
        "en/data/catalog/evm",
        "--tab",
        "Data",
        "--dropdown",
        "EVM Data",
        "--group",
        "Supported Networks",
    ]
}

/// Reads a file under `root` to a string.
pub fn read_file(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).expect("read fixture file")
}
