//! File system utilities

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

/// Create parent directories for a file path if they don't exist
pub fn create_parent_directories(file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).with_context(|| {
            format!(
                "Failed to create parent directories for: {}",
                file_path.display()
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested_file = temp_dir.path().join("a/b/c/file.txt");

        assert!(create_parent_directories(&nested_file).is_ok());
        assert!(nested_file.parent().unwrap().exists());
    }

    #[test]
    fn test_create_parent_directories_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("sub/file.txt");

        create_parent_directories(&file).unwrap();
        assert!(create_parent_directories(&file).is_ok());
    }
}
