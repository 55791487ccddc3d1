use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for gitship
#[derive(Parser, Debug, Clone)]
#[command(name = "gitship")]
#[command(about = "A CLI tool for installing pull-based deployment automation into Git repositories")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Overwrite deployment files that already exist in the target
    #[arg(short, long)]
    pub force: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable ANSI colors in output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Copy files from a local directory instead of downloading them
    #[arg(long, value_name = "DIR")]
    pub local: Option<PathBuf>,

    /// Target repository directory (defaults to the current directory)
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,
}

/// Immutable per-run configuration, built once from the parsed arguments
///
/// Components take this by reference instead of consulting flag state,
/// so there is no ambient mutable configuration anywhere in the crate.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Absolute path of the target repository directory
    pub target: PathBuf,
    /// Local source directory, when `--local` was given
    pub local: Option<PathBuf>,
    /// Overwrite existing destination files
    pub force: bool,
}

impl RunConfig {
    /// Build the run configuration from parsed arguments
    ///
    /// Resolves the target to an absolute path. The target does not have
    /// to exist yet at this point; existence is checked during repository
    /// validation, which produces the specific error message.
    ///
    /// # Errors
    ///
    /// Returns an error if the current working directory cannot be
    /// determined while resolving a relative target path.
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let raw_target = args
            .target
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let target = crate::utils::path::absolutize(&raw_target)?;

        Ok(Self {
            target,
            local: args.local.clone(),
            force: args.force,
        })
    }
}
