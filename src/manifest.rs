//! Fixed manifest of the files gitship installs
//!
//! The set of deliverables is known at build time and identical for
//! every source mode. Paths are relative to the target repository root.

/// Base URL the remote source fetches each relative path from
pub const REMOTE_BASE: &str = "https://raw.githubusercontent.com/tixena/gitship/main/templates";

/// CI workflow definitions, installed under `.github/workflows/`
pub const WORKFLOW_FILES: &[&str] = &[".github/workflows/deploy.yml"];

/// Server-side deployment files, installed under `deploy/`
pub const DEPLOY_FILES: &[&str] = &[
    "deploy/pull.sh",
    "deploy/setup-keys.sh",
    "deploy/deploy.conf.example",
    "deploy/README.md",
];

/// Directories created before any file is placed
pub const INSTALL_DIRS: &[&str] = &[".github/workflows", "deploy"];

/// Scripts that receive the executable bit after installation
pub const EXECUTABLE_FILES: &[&str] = &["deploy/pull.sh", "deploy/setup-keys.sh"];

/// Entries appended to the target's `.gitignore` when missing
pub const GITIGNORE_ENTRIES: &[&str] = &["deploy/deploy.conf", "deploy/pull.log"];

/// All files the installer places, workflow files first
pub fn all_files() -> impl Iterator<Item = &'static str> {
    WORKFLOW_FILES.iter().chain(DEPLOY_FILES).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_manifest_has_five_files() {
        assert_eq!(all_files().count(), 5);
    }

    #[test]
    fn test_install_dirs_cover_every_file() {
        for file in all_files() {
            let parent = Path::new(file).parent().unwrap();
            assert!(
                INSTALL_DIRS.iter().any(|dir| Path::new(dir) == parent),
                "no install dir covers '{file}'"
            );
        }
    }

    #[test]
    fn test_executables_are_part_of_the_manifest() {
        for script in EXECUTABLE_FILES {
            assert!(all_files().any(|file| file == *script));
        }
    }

    #[test]
    fn test_manifest_paths_are_relative() {
        for file in all_files() {
            assert!(Path::new(file).is_relative());
        }
        for entry in GITIGNORE_ENTRIES {
            assert!(Path::new(entry).is_relative());
        }
    }
}
