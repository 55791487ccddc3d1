//! `gitship` - A CLI tool for installing pull-based deployment automation into Git repositories
//!
//! This library places a fixed set of deployment files (a CI workflow
//! definition, a server-side pull script, a key-setup helper, an example
//! configuration, and documentation) into a target Git repository, either
//! downloaded from a fixed remote base URL or copied from a local
//! directory. It finishes by marking the scripts executable and adding
//! the runtime artifacts to the target's `.gitignore`.

pub mod cli;
pub mod error;
pub mod git;
pub mod install;
pub mod manifest;
pub mod source;
pub mod utils;

use anyhow::Result;
use cli::{Args, RunConfig};
use error::ShipError;
use install::Installer;
use install::housekeeping;
use source::{FileSource, LocalSource, RemoteSource};
use tracing::{debug, info, warn};

/// Main entry point for the gitship library
///
/// Runs the linear stage sequence: prerequisites, target validation,
/// source selection, directory creation, file acquisition, housekeeping,
/// summary. Validation and acquisition failures abort the run; permission
/// and ignore-file failures degrade to warnings.
///
/// # Errors
///
/// Returns an error for any aborting stage; `main` maps it to the
/// process exit code via [`ShipError::exit_code`].
pub fn run(args: &Args) -> Result<()> {
    let config = RunConfig::from_args(args)?;

    git::check_git_availability()?;

    let repo = git::validate_target(&config.target)?;
    info!(
        "Installing deployment automation into {}",
        config.target.display()
    );
    debug!(
        "Repository: root {}, branch {}, remote {}",
        repo.root.display(),
        repo.branch,
        repo.remote
    );

    let source = select_source(&config)?;
    info!("File source: {}", source.describe());

    let installer = Installer::new(&config.target, &source, config.force);
    installer.create_directories()?;

    let report = installer.install_files();
    info!(
        "Install summary: {} installed, {} skipped, {} failed",
        report.installed,
        report.skipped,
        report.failed.len()
    );

    if !report.is_success() {
        return Err(ShipError::source(format!(
            "Failed to install: {}",
            report.failed.join(", ")
        ))
        .into());
    }

    if let Err(err) = housekeeping::set_executable(&config.target) {
        warn!(
            "Could not mark deploy scripts executable: {err:#}. Run `chmod +x deploy/*.sh` manually"
        );
    }

    match housekeeping::update_gitignore(&config.target) {
        Ok(added) if added > 0 => info!("Added {added} .gitignore entr(ies)"),
        Ok(_) => {}
        Err(err) => warn!("Could not update .gitignore: {err:#}"),
    }

    print_next_steps();

    Ok(())
}

/// Select the acquisition strategy, validating it up front
///
/// Exactly one of the two validations runs: the local directory is only
/// inspected in local mode, and the network is only probed in remote mode.
fn select_source(config: &RunConfig) -> Result<FileSource> {
    if let Some(dir) = config.local.as_ref() {
        let local = LocalSource::new(dir)?;
        local.verify_complete()?;
        return Ok(FileSource::Local(local));
    }

    let remote = RemoteSource::new(manifest::REMOTE_BASE)?;
    remote.check_connectivity()?;
    Ok(FileSource::Remote(remote))
}

fn print_next_steps() {
    info!("");
    info!("\u{2713} Deployment automation installed");
    info!("");
    info!("Next steps:");
    info!("  1. Copy deploy/deploy.conf.example to deploy/deploy.conf on your server and fill it in");
    info!("  2. Run deploy/setup-keys.sh on the server to generate a deploy key");
    info!("  3. Add the key and server address as the secrets used by .github/workflows/deploy.yml");
    info!("  4. Commit the installed files and push");
}
