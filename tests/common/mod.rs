/*!
 * Common test utilities for the subgrep test suite
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample subtitle file for testing
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = r#"1
00:00:01,000 --> 00:00:02,000
hello world

2
00:00:03,000 --> 00:00:04,000
goodbye
"#;
    create_test_file(dir, filename, content)
}

/// A three-entry subtitle fixture with no interesting words
pub fn create_quiet_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = r#"1
00:00:01,000 --> 00:00:02,000
mmm

2
00:00:03,000 --> 00:00:04,000
qqq

3
00:00:05,000 --> 00:00:06,000
vvv
"#;
    create_test_file(dir, filename, content)
}
