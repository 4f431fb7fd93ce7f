use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary drafts directory
pub fn create_test_drafts_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content inside the drafts directory
pub fn create_test_file(drafts_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = drafts_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
