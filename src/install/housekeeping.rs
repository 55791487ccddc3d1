//! Post-install permission and ignore-file housekeeping
//!
//! Both steps are best-effort: the caller logs failures as warnings and
//! the run still completes, since the scripts can be chmodded and the
//! ignore entries added by hand afterwards.

use crate::manifest;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Mark the deploy scripts executable
///
/// # Errors
///
/// Returns an error if metadata or permissions cannot be updated for one
/// of the scripts.
#[inline]
pub fn set_executable(target: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt as _;

        for relative in manifest::EXECUTABLE_FILES {
            let path = target.join(relative);
            let mut permissions = fs::metadata(&path)
                .with_context(|| format!("Failed to read metadata for {}", path.display()))?
                .permissions();
            permissions.set_mode(0o755);
            fs::set_permissions(&path, permissions)
                .with_context(|| format!("Failed to mark {} executable", path.display()))?;
            debug!("Marked {} executable", path.display());
        }
    }

    #[cfg(not(unix))]
    debug!("Skipping executable bits on this platform");

    Ok(())
}

/// Append missing ignore entries to the target's `.gitignore`
///
/// Existing lines are never rewritten or reordered; entries are matched
/// as exact lines and appended at the end. The file is created when
/// absent. Returns the number of entries added.
///
/// # Errors
///
/// Returns an error if the ignore file cannot be read or written.
#[inline]
pub fn update_gitignore(target: &Path) -> Result<usize> {
    let path = target.join(".gitignore");

    let existing = if path.exists() {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    } else {
        String::new()
    };

    let missing: Vec<&str> = manifest::GITIGNORE_ENTRIES
        .iter()
        .copied()
        .filter(|entry| !existing.lines().any(|line| line == *entry))
        .collect();

    if missing.is_empty() {
        debug!("All ignore entries already present in {}", path.display());
        return Ok(0);
    }

    let mut updated = existing;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    for entry in &missing {
        updated.push_str(entry);
        updated.push('\n');
    }

    fs::write(&path, updated).with_context(|| format!("Failed to write {}", path.display()))?;

    debug!("Added {} ignore entr(ies) to {}", missing.len(), path.display());

    Ok(missing.len())
}
