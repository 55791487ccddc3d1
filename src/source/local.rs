//! Local directory file acquisition

use crate::error::ShipError;
use crate::manifest;
use crate::utils::fs::create_parent_directories;
use crate::utils::path::absolutize;
use anyhow::{Context as _, Result};
use core::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Copies manifest files from a local directory laid out like the remote
#[derive(Debug, Clone)]
pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    /// Resolve and validate the local source directory
    ///
    /// # Errors
    ///
    /// Returns a [`ShipError::Source`] if the path does not exist or is
    /// not a directory.
    #[inline]
    pub fn new(dir: &Path) -> Result<Self> {
        let root = absolutize(dir)?;

        if !root.exists() {
            return Err(ShipError::source(format!(
                "Local source directory does not exist: {}",
                root.display()
            ))
            .into());
        }

        if !root.is_dir() {
            return Err(ShipError::source(format!(
                "Local source path is not a directory: {}",
                root.display()
            ))
            .into());
        }

        Ok(Self { root })
    }

    /// The resolved source directory
    #[must_use]
    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Verify every manifest file exists under the source directory
    ///
    /// Runs once per run, before any file is touched. All missing paths
    /// are listed together rather than failing on the first one.
    ///
    /// # Errors
    ///
    /// Returns a [`ShipError::Source`] listing every missing relative path.
    #[inline]
    pub fn verify_complete(&self) -> Result<()> {
        let missing: Vec<&str> = manifest::all_files()
            .filter(|relative| !self.root.join(relative).is_file())
            .collect();

        if missing.is_empty() {
            debug!("Local source {} contains all required files", self.root.display());
            return Ok(());
        }

        let mut message = format!(
            "Local source directory {} is missing {} required file(s):",
            self.root.display(),
            missing.len()
        );
        for relative in &missing {
            write!(message, "\n  - {relative}")?;
        }

        Err(ShipError::source(message).into())
    }

    /// Copy one manifest file into `dest`
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// byte copy fails.
    #[inline]
    pub fn acquire(&self, relative: &str, dest: &Path) -> Result<()> {
        let source = self.root.join(relative);

        create_parent_directories(dest)?;
        fs::copy(&source, dest).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                source.display(),
                dest.display()
            )
        })?;

        debug!("Copied {} -> {}", source.display(), dest.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn populate(root: &Path, files: &[&str]) {
        for relative in files {
            let path = root.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, format!("content of {relative}\n")).unwrap();
        }
    }

    #[test]
    fn test_rejects_missing_directory() {
        let err = LocalSource::new(Path::new("/nonexistent/gitship/source")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_rejects_file_as_source() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not-a-dir");
        fs::write(&file, b"x").unwrap();

        let err = LocalSource::new(&file).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_verify_complete_accepts_full_source() {
        let temp_dir = TempDir::new().unwrap();
        let files: Vec<&str> = manifest::all_files().collect();
        populate(temp_dir.path(), &files);

        let source = LocalSource::new(temp_dir.path()).unwrap();
        assert!(source.verify_complete().is_ok());
    }

    #[test]
    fn test_verify_complete_lists_every_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        populate(temp_dir.path(), &[".github/workflows/deploy.yml"]);

        let source = LocalSource::new(temp_dir.path()).unwrap();
        let err = source.verify_complete().unwrap_err().to_string();

        assert!(err.contains("missing 4 required file(s)"));
        assert!(err.contains("deploy/pull.sh"));
        assert!(err.contains("deploy/setup-keys.sh"));
        assert!(err.contains("deploy/deploy.conf.example"));
        assert!(err.contains("deploy/README.md"));
        assert!(!err.contains("deploy.yml"));
    }

    #[test]
    fn test_acquire_copies_bytes() {
        let source_dir = TempDir::new().unwrap();
        let target_dir = TempDir::new().unwrap();
        populate(source_dir.path(), &["deploy/pull.sh"]);

        let source = LocalSource::new(source_dir.path()).unwrap();
        let dest = target_dir.path().join("deploy/pull.sh");
        source.acquire("deploy/pull.sh", &dest).unwrap();

        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "content of deploy/pull.sh\n"
        );
    }
}
