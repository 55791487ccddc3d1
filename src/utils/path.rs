//! Path resolution utilities

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory
///
/// Falls back to the path unchanged when no home directory can be
/// determined; later existence checks produce the actual error.
#[must_use]
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.to_path_buf();
    };

    if text == "~" || text.starts_with("~/") {
        if let Ok(home) = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) {
            return PathBuf::from(text.replacen('~', &home, 1));
        }
    }

    path.to_path_buf()
}

/// Resolve a path to an absolute path without requiring it to exist
///
/// # Errors
///
/// Returns an error if the current working directory cannot be
/// determined while resolving a relative path.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_home(path);

    if expanded.is_absolute() {
        return Ok(expanded);
    }

    let cwd = std::env::current_dir().context("Cannot determine current working directory")?;
    Ok(cwd.join(expanded))
}
