// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use suite_reporter::models::{TestSuite, TestSuiteState, TestSuites};
use tempfile::TempDir;

/// Builds a resolved suite whose path is derived from its name.
pub fn suite(name: &str, state: TestSuiteState) -> TestSuite {
    TestSuite::with_state(name, format!("./{}", name.to_lowercase()), state)
}

pub fn suites(entries: &[(&str, TestSuiteState)]) -> TestSuites {
    entries
        .iter()
        .map(|(name, state)| suite(name, *state))
        .collect()
}

/// Writes `content` to `file_name` inside `temp_dir` and returns the path.
pub fn write_file(temp_dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(file_name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// A manifest with one suite per state, in a deliberately unsorted order.
pub fn create_toml_manifest(temp_dir: &TempDir) -> PathBuf {
    let content = r#"
[[suites]]
package_name = "storage"
path = "./storage"
state = "failed"

[[suites]]
package_name = "api"
path = "./api"
state = "passed"

[[suites]]
package_name = "codec"
path = "./codec"
state = "failed_to_compile"

[[suites]]
package_name = "scheduler"
path = "./scheduler"
state = "failed_due_to_timeout"

[[suites]]
package_name = "cli"
path = "./cli"
state = "skipped"

[[suites]]
package_name = "docs"
path = "./docs"
"#;
    write_file(temp_dir, "suites.toml", content)
}

pub fn create_json_manifest(temp_dir: &TempDir) -> PathBuf {
    let content = r#"{
  "suites": [
    { "package_name": "net", "path": "./net", "state": "failed" },
    { "package_name": "io", "path": "./io", "state": "passed" }
  ]
}"#;
    write_file(temp_dir, "suites.json", content)
}
