//! # gitship
//!
//! gitship is a one-shot installer that sets up pull-based deployment
//! automation in a Git repository: a GitHub Actions workflow that
//! triggers a server-side `git pull`, the pull script itself, an SSH
//! key-setup helper, an example configuration, and documentation.
//!
//! ## Usage
//!
//! **Install into the current repository:**
//! ```sh
//! gitship
//! ```
//!
//! **Install from a local directory into another repository:**
//! ```sh
//! gitship --local /srv/gitship-files ~/projects/app
//! ```
//!
//! Existing files are left untouched unless `--force` is given, so the
//! installer is safe to re-run. See `gitship --help` for all options.

use anyhow::Result;
use clap::Parser as _;
use gitship::cli::Args;
use gitship::error::ShipError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Quiet keeps errors only; verbose surfaces debug lines.
    let log_level = if args.quiet {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_ansi(!args.no_color)
        .with_env_filter(filter)
        .init();

    match gitship::run(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<ShipError>()
                    .map_or(1, ShipError::exit_code),
            );
        }
    }
}
