#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Parameters for `y = sin(x)^2` over 0, 1, 2.
pub const UNIT_SWEEP_CONFIG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<config>
  <n0>0</n0>
  <h>1</h>
  <nk>2</nk>
  <a>1</a>
  <b>0</b>
  <c>0</c>
</config>
"#;

/// Same as [`UNIT_SWEEP_CONFIG`] with `c` left out.
pub const MISSING_C_CONFIG: &str = r#"<config>
  <n0>0</n0>
  <h>1</h>
  <nk>2</nk>
  <a>1</a>
  <b>0</b>
</config>
"#;

/// Build a configuration document from the six parameters.
pub fn config_xml(n0: &str, h: &str, nk: &str, a: &str, b: &str, c: &str) -> String {
    format!(
        "<config><n0>{n0}</n0><h>{h}</h><nk>{nk}</nk><a>{a}</a><b>{b}</b><c>{c}</c></config>"
    )
}

/// Creates a temporary directory holding `file_name` with `contents`
pub fn setup_config_file(file_name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(file_name);
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

pub fn read_file(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Common assertion helper for error messages
pub fn assert_error_contains(error_string: &str, expected_messages: &[&str]) {
    for msg in expected_messages {
        assert!(
            error_string.contains(msg),
            "Expected error to contain '{msg}', but got: {error_string}"
        );
    }
}
