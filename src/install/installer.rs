//! File installation coordination

use crate::error::ShipError;
use crate::manifest;
use crate::source::FileSource;
use anyhow::Result;
use std::path::Path;
use tracing::{debug, info, warn};

/// Per-run tallies for the installation step
#[derive(Debug, Default)]
pub struct InstallReport {
    pub installed: usize,
    pub skipped: usize,
    pub failed: Vec<String>,
}

impl InstallReport {
    /// A run succeeds when no individual file failed; skips are fine
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Installs the manifest files into a validated target repository
#[non_exhaustive]
pub struct Installer<'run> {
    target: &'run Path,
    source: &'run FileSource,
    force: bool,
}

impl<'run> Installer<'run> {
    /// Create an installer for a validated target and selected source
    #[must_use]
    #[inline]
    pub const fn new(target: &'run Path, source: &'run FileSource, force: bool) -> Self {
        Self {
            target,
            source,
            force,
        }
    }

    /// Create every manifest directory under the target
    ///
    /// Idempotent; directories that already exist are not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`ShipError::Filesystem`] if a directory cannot be created.
    #[inline]
    pub fn create_directories(&self) -> Result<()> {
        for dir in manifest::INSTALL_DIRS {
            let path = self.target.join(dir);
            std::fs::create_dir_all(&path).map_err(|err| {
                ShipError::filesystem(format!(
                    "Failed to create directory '{}': {err}",
                    path.display()
                ))
            })?;
            debug!("Ensured directory {}", path.display());
        }

        Ok(())
    }

    /// Acquire every manifest file, honoring the overwrite flag
    ///
    /// Existing destinations are skipped unless `force` is set. A failed
    /// file is recorded and the remaining files are still attempted, so
    /// the report covers the whole manifest.
    #[must_use]
    #[inline]
    pub fn install_files(&self) -> InstallReport {
        let mut report = InstallReport::default();

        for relative in manifest::all_files() {
            let dest = self.target.join(relative);

            if dest.exists() && !self.force {
                info!("  - {relative} (exists, skipped)");
                report.skipped += 1;
                continue;
            }

            match self.source.acquire(relative, &dest) {
                Ok(()) => {
                    info!("  \u{2713} {relative}");
                    report.installed += 1;
                }
                Err(err) => {
                    warn!("  \u{2717} {relative}: {err:#}");
                    report.failed.push(relative.to_owned());
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::LocalSource;
    use std::fs;
    use tempfile::TempDir;

    fn populated_source(temp_dir: &TempDir) -> FileSource {
        for relative in manifest::all_files() {
            let path = temp_dir.path().join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, format!("content of {relative}\n")).unwrap();
        }
        FileSource::Local(LocalSource::new(temp_dir.path()).unwrap())
    }

    #[test]
    fn test_fresh_install_places_every_file() {
        let source_dir = TempDir::new().unwrap();
        let target_dir = TempDir::new().unwrap();
        let source = populated_source(&source_dir);

        let installer = Installer::new(target_dir.path(), &source, false);
        installer.create_directories().unwrap();
        let report = installer.install_files();

        assert!(report.is_success());
        assert_eq!(report.installed, 5);
        assert_eq!(report.skipped, 0);
        for relative in manifest::all_files() {
            assert!(target_dir.path().join(relative).is_file());
        }
    }

    #[test]
    fn test_second_run_skips_everything() {
        let source_dir = TempDir::new().unwrap();
        let target_dir = TempDir::new().unwrap();
        let source = populated_source(&source_dir);

        let installer = Installer::new(target_dir.path(), &source, false);
        installer.create_directories().unwrap();
        installer.install_files();

        installer.create_directories().unwrap();
        let report = installer.install_files();

        assert!(report.is_success());
        assert_eq!(report.installed, 0);
        assert_eq!(report.skipped, 5);
    }

    #[test]
    fn test_existing_file_untouched_without_force() {
        let source_dir = TempDir::new().unwrap();
        let target_dir = TempDir::new().unwrap();
        let source = populated_source(&source_dir);

        let existing = target_dir.path().join("deploy/pull.sh");
        fs::create_dir_all(existing.parent().unwrap()).unwrap();
        fs::write(&existing, "my customized pull script\n").unwrap();

        let installer = Installer::new(target_dir.path(), &source, false);
        installer.create_directories().unwrap();
        let report = installer.install_files();

        assert!(report.is_success());
        assert_eq!(report.installed, 4);
        assert_eq!(report.skipped, 1);
        assert_eq!(
            fs::read_to_string(&existing).unwrap(),
            "my customized pull script\n"
        );
    }

    #[test]
    fn test_force_overwrites_existing_files() {
        let source_dir = TempDir::new().unwrap();
        let target_dir = TempDir::new().unwrap();
        let source = populated_source(&source_dir);

        let existing = target_dir.path().join("deploy/pull.sh");
        fs::create_dir_all(existing.parent().unwrap()).unwrap();
        fs::write(&existing, "my customized pull script\n").unwrap();

        let installer = Installer::new(target_dir.path(), &source, true);
        installer.create_directories().unwrap();
        let report = installer.install_files();

        assert!(report.is_success());
        assert_eq!(report.installed, 5);
        assert_eq!(report.skipped, 0);
        assert_eq!(
            fs::read_to_string(&existing).unwrap(),
            "content of deploy/pull.sh\n"
        );
    }

    #[test]
    fn test_failed_file_is_recorded_and_rest_continue() {
        let source_dir = TempDir::new().unwrap();
        let target_dir = TempDir::new().unwrap();
        let source = populated_source(&source_dir);

        // Break exactly one source file after validation would have passed.
        fs::remove_file(source_dir.path().join("deploy/README.md")).unwrap();

        let installer = Installer::new(target_dir.path(), &source, false);
        installer.create_directories().unwrap();
        let report = installer.install_files();

        assert!(!report.is_success());
        assert_eq!(report.installed, 4);
        assert_eq!(report.failed, vec!["deploy/README.md".to_owned()]);
    }
}
