use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary topics directory
pub fn create_test_topics_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a file under the topics directory, making parent directories
pub fn create_test_file(topics_dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let file_path = topics_dir.path().join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
