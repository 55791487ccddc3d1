//! Git repository validation and diagnostics

use crate::error::ShipError;
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Sentinel reported when the work tree has no named branch
const DETACHED_SENTINEL: &str = "(detached HEAD)";

/// Sentinel reported when no remote is configured
const NO_REMOTE_SENTINEL: &str = "(none)";

/// Diagnostic metadata gathered from a validated target repository
///
/// Branch and remote are informational only; detached state and a
/// missing remote are reported through sentinels, never as errors.
#[derive(Debug, Clone)]
pub struct RepoReport {
    pub root: PathBuf,
    pub branch: String,
    pub remote: String,
}

/// Check if Git is available on the host
///
/// # Errors
///
/// Returns an error if:
/// - The Git command is not found in PATH
/// - The Git command failed to execute properly
#[inline]
pub fn check_git_availability() -> Result<()> {
    let output = Command::new("git").args(["--version"]).output().map_err(|err| {
        ShipError::prerequisite(format!(
            "Git command not found ({err}). Install Git and ensure it is available in PATH"
        ))
    })?;

    if !output.status.success() {
        return Err(ShipError::prerequisite("Git command failed to execute properly").into());
    }

    debug!("Found {}", String::from_utf8_lossy(&output.stdout).trim());

    Ok(())
}

/// Validate the target directory and gather repository diagnostics
///
/// Checks, in order: existence, directory-ness, read access, recognition
/// by Git as (part of) a work tree, and write access. Each failing check
/// aborts with a specific remediation. On success the repository root,
/// current branch, and remote URL are gathered for diagnostics, and a
/// warning is emitted when the target is not the repository root.
///
/// # Errors
///
/// Returns a [`ShipError::Target`] describing the first failing check.
#[inline]
pub fn validate_target(target: &Path) -> Result<RepoReport> {
    if !target.exists() {
        return Err(ShipError::target(format!(
            "Target directory does not exist: {}",
            target.display()
        ))
        .into());
    }

    if !target.is_dir() {
        return Err(ShipError::target(format!(
            "Target is not a directory: {}",
            target.display()
        ))
        .into());
    }

    std::fs::read_dir(target).map_err(|err| {
        ShipError::target(format!(
            "Target directory is not readable: {} ({err})",
            target.display()
        ))
    })?;

    let is_work_tree = run_git(target, &["rev-parse", "--is-inside-work-tree"])
        .map(|out| out == "true")
        .unwrap_or(false);

    if !is_work_tree {
        return Err(ShipError::target(format!(
            "'{}' is not inside a Git repository. Run `git init` there first, or point gitship at an existing repository",
            target.display()
        ))
        .into());
    }

    // Probe with an actual write so ACLs and read-only mounts are caught,
    // not just the permission bits. The probe file is removed on drop.
    tempfile::Builder::new()
        .prefix(".gitship-probe")
        .tempfile_in(target)
        .map_err(|err| {
            ShipError::target(format!(
                "Target directory is not writable: {} ({err})",
                target.display()
            ))
        })?;

    let root = run_git(target, &["rev-parse", "--show-toplevel"])
        .map(PathBuf::from)
        .unwrap_or_else(|_| target.to_path_buf());
    let branch = branch_label(run_git(target, &["branch", "--show-current"]).ok().as_deref());
    let remote = remote_label(run_git(target, &["remote", "get-url", "origin"]).ok().as_deref());

    debug!("Repository root: {}", root.display());
    debug!("Current branch: {branch}");
    debug!("Remote origin: {remote}");

    let canonical_target = target.canonicalize().unwrap_or_else(|_| target.to_path_buf());
    let canonical_root = root.canonicalize().unwrap_or_else(|_| root.clone());
    if canonical_target != canonical_root {
        warn!(
            "Target '{}' is not the repository root ('{}'); files will be installed under the target",
            canonical_target.display(),
            canonical_root.display()
        );
    }

    Ok(RepoReport { root, branch, remote })
}

/// Run a git subcommand in `dir`, returning trimmed stdout on success
fn run_git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("git {} failed: {}", args.join(" "), stderr.trim());
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}

fn branch_label(stdout: Option<&str>) -> String {
    match stdout {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => DETACHED_SENTINEL.to_owned(),
    }
}

fn remote_label(stdout: Option<&str>) -> String {
    match stdout {
        Some(url) if !url.is_empty() => url.to_owned(),
        _ => NO_REMOTE_SENTINEL.to_owned(),
    }
}
