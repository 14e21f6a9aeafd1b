//! Integration tests for Settings config loading with layered merge semantics.
//!
//! Merge Semantics:
//! - Defaults → Global → Local file → Env vars, later layers replace earlier
//!   ones key by key.
//!
//! Note: These tests run without a global config (temp directories only),
//! so they effectively test local config merging with defaults.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use rscalc::config::{local_config_path, Settings};

#[test]
fn given_no_config_files_when_loading_then_uses_defaults() {
    // Arrange: empty directory, no local config
    let dir = TempDir::new().unwrap();

    // Act
    let settings = Settings::load(Some(dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings.output_path, PathBuf::from("expressionResult.json"));
    assert!(settings.pretty);
}

#[test]
fn given_local_config_when_loading_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let local_config = r#"
output_path = "results/out.json"
pretty = false
"#;
    fs::write(local_config_path(dir.path()), local_config).unwrap();

    // Act
    let settings = Settings::load(Some(dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings.output_path, PathBuf::from("results/out.json"));
    assert!(!settings.pretty);
}

#[test]
fn given_partial_local_config_when_loading_then_keeps_remaining_defaults() {
    // Arrange: only pretty is overridden
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "pretty = false\n").unwrap();

    // Act
    let settings = Settings::load(Some(dir.path())).expect("load settings");

    // Assert
    assert_eq!(settings.output_path, PathBuf::from("expressionResult.json"));
    assert!(!settings.pretty);
}
